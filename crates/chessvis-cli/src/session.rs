use crate::scorelog::{RoundRecord, ScoreLog};
use anyhow::Result;
use chessvis_core::GameRules;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Outcome of one answered round.
#[derive(Debug, Clone, Copy)]
struct Round {
    correct: bool,
    time_secs: f64,
}

/// End-of-session aggregates.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Summary {
    answered: usize,
    correct: usize,
    total_time_secs: f64,
}

impl Summary {
    fn of(results: &[Round]) -> Self {
        Self {
            answered: results.len(),
            correct: results.iter().filter(|r| r.correct).count(),
            total_time_secs: results.iter().map(|r| r.time_secs).sum(),
        }
    }

    fn percent_correct(&self) -> f64 {
        self.correct as f64 / self.answered as f64 * 100.0
    }

    fn avg_time_secs(&self) -> f64 {
        self.total_time_secs / self.answered as f64
    }
}

/// One training session: a fixed number of rounds of a single game
/// variant, graded and timed, with every answered round appended to the
/// score log.
pub struct Session {
    game: Box<dyn GameRules>,
    rounds: u32,
    log: ScoreLog,
    results: Vec<Round>,
    log_warned: bool,
}

impl Session {
    pub fn new(game: Box<dyn GameRules>, rounds: u32, log: ScoreLog) -> Self {
        Self {
            game,
            rounds,
            log,
            results: Vec::new(),
            log_warned: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        let mut rng = rand::thread_rng();

        println!("{}", self.game.instructions());
        println!("Type 'quit' to stop early. Ready?... GO!\n");

        for round in 1..=self.rounds {
            let challenge = self.game.deal(&mut rng);
            println!("{challenge} ?");
            let clock = Instant::now();

            // Re-prompt the same challenge until a line grades; the clock
            // keeps running across malformed attempts.
            let graded = loop {
                print!("({}) ", self.game.name());
                io::stdout().flush()?;
                let line = match lines.next() {
                    Some(line) => line?,
                    None => break None,
                };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line == "quit" {
                    break None;
                }
                match self.game.grade(line, &challenge) {
                    Ok(correct) => break Some((line.to_string(), correct)),
                    Err(err) => println!("{err}"),
                }
            };

            let Some((answer, correct)) = graded else {
                break;
            };
            let time_secs = clock.elapsed().as_secs_f64();

            if correct {
                println!("{}", "Correct!".green());
            } else {
                println!(
                    "{} Answer was {}",
                    "Incorrect!".red(),
                    self.game.correct_answer(&challenge)
                );
            }

            let record =
                RoundRecord::new(round, self.game.name(), &challenge, &answer, correct, time_secs);
            if let Err(err) = self.log.append(&record) {
                if !self.log_warned {
                    eprintln!("warning: could not write score log: {err}");
                    self.log_warned = true;
                }
            }
            self.results.push(Round { correct, time_secs });
        }

        self.print_summary();
        Ok(())
    }

    fn print_summary(&self) {
        println!("\n\n{} session finished!", self.game.name());
        if self.results.is_empty() {
            println!("No rounds answered.");
            return;
        }
        let summary = Summary::of(&self.results);
        println!(
            "Number correct: {} out of {}",
            summary.correct, summary.answered
        );
        println!("Percent correct: {:.1}%", summary.percent_correct());
        println!("Average time per answer: {:.2}s", summary.avg_time_secs());
    }
}
