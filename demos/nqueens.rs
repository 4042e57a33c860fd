use clap::Parser;
use parsnip_solver::constraints;
use parsnip_solver::Assignment;
use parsnip_solver::Comparator;
use parsnip_solver::Model;
use parsnip_solver::VarId;

#[derive(Parser)]
struct Cli {
    /// The size of the chess board.
    n: u32,

    /// Print the solver statistics after solving.
    #[arg(short, long)]
    statistics: bool,
}

fn main() {
    env_logger::init();

    let Cli { n, statistics } = Cli::parse();

    if n < 2 {
        println!("Please provide an 'n > 1'");
        return;
    }

    if statistics {
        parsnip_solver::statistics::configure_statistic_logging("%%", None, None);
    }

    let mut model = Model::default();

    // One variable per column, holding the row of that column's queen.
    let queens: Vec<VarId> = (0..n)
        .map(|i| model.add_named_int_var(0, n as i32, format!("q{i}")))
        .collect();

    // No two queens share a row or either diagonal.
    for i in 0..n as usize {
        for j in (i + 1)..n as usize {
            let distance = (j - i) as i32;
            let _ = model.add_constraint(constraints::binary(
                queens[i],
                Comparator::NotEqual,
                queens[j],
                0,
            ));
            let _ = model.add_constraint(constraints::binary(
                queens[i],
                Comparator::NotEqual,
                queens[j],
                distance,
            ));
            let _ = model.add_constraint(constraints::binary(
                queens[i],
                Comparator::NotEqual,
                queens[j],
                -distance,
            ));
        }
    }
    model.finalize();

    let mut assignment = Assignment::default();
    assignment.reset(&model);

    if model.forward_checking_step(&mut assignment) {
        let row_separator = format!("{}+", "+---".repeat(n as usize));

        for row in 0..n as i32 {
            println!("{row_separator}");

            for &queen in &queens {
                let queen_row = assignment.value(queen).expect("the assignment is complete");
                let cell = if queen_row == row { "| * " } else { "|   " };

                print!("{cell}");
            }

            println!("|");
        }

        println!("{row_separator}");
    } else {
        println!("{n}-queens is unsatisfiable.");
    }

    if statistics {
        assignment.log_statistics();
    }
}
