use freckers::builder::{BoardBuilder, Builder};
use freckers::{Location, Rules};
use log::info;

fn main() {
    env_logger::init();

    let board = BoardBuilder::default()
        .add_frog(Location(0, 5))
        .add_pads([
            Location(0, 4), Location(1, 4), Location(1, 6), Location(2, 3), Location(2, 5),
            Location(3, 2), Location(3, 4), Location(4, 1), Location(4, 4), Location(5, 4),
            Location(6, 3), Location(6, 6), Location(7, 4), Location(7, 6),
        ])
        .add_obstacles([
            Location(1, 5), Location(2, 4), Location(3, 3), Location(3, 5), Location(4, 2),
            Location(5, 3), Location(6, 4), Location(6, 5), Location(7, 5),
        ])
        .build()
        .unwrap();

    match board.solve(&Rules::default()) {
        Some(plan) => {
            info!("found a crossing in {} actions", plan.len());
            for action in plan {
                println!("{}", action);
            }
        }
        None => println!("no crossing exists"),
    }
}
