use clap::{Parser, Subcommand};
use gradebook::{Student, Tree};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about)]
struct Options {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the sample roster and walk through find, maximum, minimum and remove.
    Demo {
        /// Save the resulting roster to this file.
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Print a saved roster in ascending order of average grade.
    Show {
        path: PathBuf,

        /// Draw the tree instead of listing the students.
        #[arg(long)]
        tree: bool,
    },

    /// Remove the student with the given average grade from a saved roster.
    Remove {
        path: PathBuf,

        #[arg(allow_hyphen_values = true)]
        grade: f64,
    },
}

fn sample_roster() -> Vec<Student> {
    vec![
        Student::new("Umar", "4217", 2, 19, 97.0),
        Student::new("Dima", "4217", 2, 19, 5.0),
        Student::new("Aleksandr", "4217", 3, 19, 12.0),
        Student::new("Sherzod", "4217", 2, 19, 47.0),
        Student::new("Nikita", "4217", 2, 19, 91.0),
        Student::new("Liza", "4217", 2, 19, 65.0),
        Student::new("Neforochek", "4217", 2, 19, 10.0),
        Student::new("Nastya", "4217", 2, 19, 86.0),
        Student::new("Natasha", "4217", 2, 19, 76.0),
        Student::new("Vlad Laikhtman", "4217", 2, 19, 44.0),
    ]
}

fn demo(save: Option<PathBuf>) -> gradebook::Result<()> {
    let roster = sample_roster();
    let to_find = roster[0].key();
    let to_remove = roster[1].key();
    let mut tree: Tree = roster.into_iter().collect();

    println!("----- Find ------");
    match tree.find(to_find) {
        Some(student) => println!("Found student with key value {}: {}", to_find, student),
        None => println!("Student with key value {} not found", to_find),
    }

    println!("----- Max key ------");
    println!("Student with max key value: {}", tree.maximum()?);

    println!("----- Min key ------");
    println!("Student with min key value: {}", tree.minimum()?);

    println!("----- Remove ------");
    println!("Remove student with key value: {}", to_remove);
    tree.remove(to_remove)?;
    print!("{}", tree);

    if let Some(path) = save {
        tree.save(&path)?;
        info!("saved {} students to {}", tree.len(), path.display());
    }

    Ok(())
}

fn run(command: Command) -> gradebook::Result<()> {
    match command {
        Command::Demo { save } => demo(save),
        Command::Show { path, tree: draw } => {
            let mut tree = Tree::new();
            tree.load(&path)?;

            if draw {
                print!("{}", tree);
            } else {
                tree.symmetric_traversal(|student| println!("{}", student));
            }

            Ok(())
        }
        Command::Remove { path, grade } => {
            let mut tree = Tree::new();
            tree.load(&path)?;

            match tree.remove(grade)? {
                Some(student) => {
                    tree.save(&path)?;
                    info!("removed {}", student);
                }
                None => info!("no student with average grade {}", grade),
            }

            Ok(())
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Options::parse().command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
