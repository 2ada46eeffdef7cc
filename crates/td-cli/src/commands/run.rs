use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use td_core::{BattleConfig, RepeatPolicy, Side, TieBreak};
use td_duel::Duel;

/// Options for the `run` subcommand.
pub struct RunOptions {
    pub seed: u64,
    pub max_turns: u32,
    pub powerless: String,
    pub powerful: String,
    pub temperature: f64,
    pub single_use: bool,
    pub tie_break: String,
    pub json: bool,
}

pub fn run(opts: &RunOptions) -> Result<(), String> {
    let tie_break = parse_tie_break(&opts.tie_break)?;
    let repeat_policy = if opts.single_use {
        RepeatPolicy::SingleUse
    } else {
        RepeatPolicy::CooldownOnly
    };

    let config = BattleConfig::default()
        .with_seed(opts.seed)
        .with_max_turns(opts.max_turns)
        .with_temperature(opts.temperature)
        .with_repeat_policy(repeat_policy)
        .with_tie_break(tie_break);

    let mut duel = Duel::new(
        config,
        parse_traits(&opts.powerless),
        parse_traits(&opts.powerful),
    );
    let outcome = duel
        .run_to_end()
        .map_err(|e| format!("duel failed: {e}"))?;

    if opts.json {
        let payload = serde_json::json!({
            "log": duel.log(),
            "outcome": outcome,
            "victory": duel.victory(),
        });
        let rendered =
            serde_json::to_string_pretty(&payload).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    println!(
        "  {} duel (seed {}, {} turns max)\n",
        "Starting".bold(),
        opts.seed,
        opts.max_turns
    );

    for report in duel.log() {
        let marker = if report.success {
            "lands".green()
        } else {
            "misses".red()
        };
        println!(
            "{} {} plays {} — {}",
            format!("[{:>2}]", report.turn).dimmed(),
            report.attacker,
            report.move_id.to_string().bold(),
            marker
        );
        println!("     {}", report.action_line);
        println!("     {}\n", report.effect_line.dimmed());
    }

    print_scoreboard(&duel);

    println!("\n  {}: {}", "Outcome".bold(), outcome);
    if let Some(victory) = duel.victory() {
        println!("\n{}", victory.text.italic());
    }

    Ok(())
}

fn print_scoreboard(duel: &Duel) {
    let state = duel.state();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Side", "Momentum", "Credibility", "Crowd", "Constraints"]);

    for side in Side::all() {
        let constraints = if state.constraints[*side].is_empty() {
            "—".to_string()
        } else {
            state.constraints[*side]
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            side.full_name().to_string(),
            state.momentum[*side].to_string(),
            state.credibility[*side].to_string(),
            state.crowd[*side].to_string(),
            constraints,
        ]);
    }

    println!("{table}");
}

fn parse_traits(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn parse_tie_break(value: &str) -> Result<TieBreak, String> {
    match value.to_lowercase().as_str() {
        "draw" => Ok(TieBreak::Draw),
        "powerless" => Ok(TieBreak::Favor(Side::Powerless)),
        "powerful" => Ok(TieBreak::Favor(Side::Powerful)),
        other => Err(format!(
            "unknown tie-break '{other}' (expected draw, powerless, or powerful)"
        )),
    }
}
