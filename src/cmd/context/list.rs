use crate::cli::context::list_context;
use crate::tui::print_color;
use crate::Result;

pub fn execute() -> Result<()> {
    let context = list_context()?;

    // TODO: Improve formatting
    print_color("Name           Query Host                         Set", None);
    println!("-------------- ---------------------------------- -----");

    for e in context.environment {
        let set = e.set.unwrap_or(false);
        println!("{:<14} {:<34} {}", e.name, e.query_host, set);
    }

    Ok(())
}
