use court_schedule_core::{round_robin, sequence};

use crate::Error;

pub fn run(teams: usize) -> Result<(), Error> {
    let rounds = round_robin::generate(teams)?;

    for (index, round) in rounds.iter().enumerate() {
        let matches: Vec<_> = round.iter().map(ToString::to_string).collect();

        match round.bye() {
            Some(bye) => println!("Round {}: {} (bye: {})", index + 1, matches.join(" "), bye),
            None => println!("Round {}: {}", index + 1, matches.join(" ")),
        }
    }

    let schedule = sequence::build(&rounds, teams)?;

    println!();
    println!("  # | Match");
    for (index, m) in schedule.iter().enumerate() {
        println!("{:>3} | {}", index + 1, m);
    }

    println!();
    println!("{} back-to-back matches", schedule.back_to_back().len());

    Ok(())
}
