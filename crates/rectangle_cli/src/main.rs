//! Manual exercise entry point.
//!
//! # Responsibility
//! - Attempt a fixed sequence of rectangle creations and print each outcome.
//! - List every stored rectangle with its fields at the end.
//!
//! Storage and logging follow `RECTANGLE_*` environment variables.

use log::info;
use rectangle_core::db::open_db_with_config;
use rectangle_core::{
    core_version, init_logging_from_config, CoreConfig, Rectangle, RectangleInput,
    RectangleService, RepoError, SqliteRectangleRepository,
};
use serde_json::json;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = CoreConfig::from_env()?;
    init_logging_from_config(&config)?;
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let conn = open_db_with_config(&config)?;
    let service = RectangleService::new(SqliteRectangleRepository::new(&conn));

    let attempts = [
        RectangleInput::new(5, 10),
        RectangleInput::new(-5, 10),
        RectangleInput::new(5, json!("10")),
        RectangleInput::new(0, 10),
    ];
    for input in attempts {
        match service.create_from_input(input) {
            Ok(rect) => print_rectangle(&rect),
            Err(RepoError::Validation(err)) => println!("{} error: {err}", err.kind()),
            Err(other) => return Err(other.into()),
        }
    }

    for rect in service.all()? {
        print_rectangle(&rect);
    }
    Ok(())
}

fn print_rectangle(rect: &Rectangle) {
    println!("{rect}");
    for field in rect {
        println!("{field}");
    }
}
