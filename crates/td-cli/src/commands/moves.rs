use comfy_table::{ContentArrangement, Table};

use td_engine::CATALOG;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Move", "Sides", "Base", "Cooldown", "Unlocked by"]);

    for def in CATALOG {
        let sides = def
            .allowed_sides
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let cooldown = if def.cooldown_turns == 0 {
            "—".to_string()
        } else {
            format!("{} turns", def.cooldown_turns)
        };
        table.add_row(vec![
            def.id.to_string(),
            sides,
            format!("{:.2}", def.base),
            cooldown,
            def.requires_any_trait.join(", "),
        ]);
    }

    println!("{table}");
    println!("  {} moves in the catalog.", CATALOG.len());
    Ok(())
}
