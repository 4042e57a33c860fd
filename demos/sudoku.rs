use clap::Parser;
use parsnip_solver::constraints;
use parsnip_solver::Assignment;
use parsnip_solver::Model;
use parsnip_solver::VarId;

const GRID_SIZE: usize = 9;

/// A classic partial grid; zero marks an open cell.
const CLUES: [[i32; GRID_SIZE]; GRID_SIZE] = [
    [0, 0, 3, 0, 2, 0, 6, 0, 0],
    [9, 0, 0, 3, 0, 5, 0, 0, 1],
    [0, 0, 1, 8, 0, 6, 4, 0, 0],
    [0, 0, 8, 1, 0, 2, 9, 0, 0],
    [7, 0, 0, 0, 0, 0, 0, 0, 8],
    [0, 0, 6, 7, 0, 8, 2, 0, 0],
    [0, 0, 2, 6, 0, 9, 5, 0, 0],
    [8, 0, 0, 2, 0, 3, 0, 0, 9],
    [0, 0, 5, 0, 1, 0, 3, 0, 0],
];

#[derive(Parser)]
struct Cli {
    /// Print the solver statistics after solving.
    #[arg(short, long)]
    statistics: bool,
}

fn main() {
    env_logger::init();

    let Cli { statistics } = Cli::parse();

    if statistics {
        parsnip_solver::statistics::configure_statistic_logging("%%", None, None);
    }

    let mut model = Model::default();

    let cells: Vec<Vec<VarId>> = CLUES
        .iter()
        .map(|row| {
            row.iter()
                .map(|&clue| {
                    if clue == 0 {
                        model.add_int_var(1, GRID_SIZE as i32 + 1)
                    } else {
                        model.add_fixed_var(clue)
                    }
                })
                .collect()
        })
        .collect();

    for row in &cells {
        let _ = model.add_constraint(constraints::all_different(row.clone()));
    }
    for column in 0..GRID_SIZE {
        let column_cells: Vec<VarId> = cells.iter().map(|row| row[column]).collect();
        let _ = model.add_constraint(constraints::all_different(column_cells));
    }
    model.finalize();

    let mut assignment = Assignment::default();
    assignment.reset(&model);

    if model.forward_checking_step(&mut assignment) {
        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .map(|&cell| {
                    assignment
                        .value(cell)
                        .expect("the assignment is complete")
                        .to_string()
                })
                .collect();
            println!("{}", line.join(" "));
        }
    } else {
        println!("The grid is unsatisfiable.");
    }

    if statistics {
        assignment.log_statistics();
    }
}
