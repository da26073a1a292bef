// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

extern crate amr;
extern crate amr_eval;

#[macro_use]
extern crate error_chain;
extern crate serde_json;
#[macro_use]
extern crate log;
extern crate env_logger;
#[macro_use]
extern crate clap;
#[macro_use]
extern crate prettytable;

use amr::prelude::read_amr_file;
use amr_eval::prelude::{Settings, Timer, calc_metrics_with_settings};
use errors::*;

mod errors;
mod report;

fn main() {
    env_logger::init();
    let mut timer = Timer::start();

    let app_m = clap_app!(amr_eval =>
        (about: "Fine-grained evaluation of AMRs: concepts, named entities, negations, wikification, op_class, reentrancies and SRL")
        (@arg pred: +required "file of predicted AMRs, separated by blank lines")
        (@arg gold: +required "file of gold AMRs, in the same order as the predicted AMRs")
        (@arg settings: -c --settings +takes_value "settings file")
        (@arg json: --json "print the scores as JSON")
    ).get_matches();

    if let Err(ref e) = run(&app_m) {
        println!("error: {}", e);
        for e in e.iter().skip(1) {
            println!("caused by: {}", e);
        }

        // The backtrace is not always generated. Try to run this example
        // with `RUST_BACKTRACE=1`.
        if let Some(backtrace) = e.backtrace() {
            println!("{:?}", backtrace);
        }

        ::std::process::exit(1);
    }

    timer.lap_and_report("!! Finish the program !!");
}

fn run(app_m: &clap::ArgMatches) -> Result<()> {
    let settings = match app_m.value_of("settings") {
        Some(fsettings) => Settings::from_yaml_file(fsettings)?,
        None => Settings::default()
    };
    debug!("Current settings: {:?}", settings);

    // both arguments are required, clap exits before reaching here if they are missing
    let pred = read_amr_file(app_m.value_of("pred").unwrap_or_default())?;
    let gold = read_amr_file(app_m.value_of("gold").unwrap_or_default())?;

    let scores = calc_metrics_with_settings(&pred, &gold, &settings)?;
    if app_m.is_present("json") {
        println!("{}", report::scores_json(&scores)?);
    } else {
        report::scores_table(&scores).printstd();
    }

    Ok(())
}
