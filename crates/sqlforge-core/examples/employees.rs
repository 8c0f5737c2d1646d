//! Employee directory queries.
//!
//! Builds a handful of statements against an HR schema and prints them for
//! both the generic and the `SQLite` dialect. Pass `-v` to see the debug events
//! emitted while rendering.
//!
//! Run with: cargo run --example employees -- -v

use sqlforge_core::prelude::*;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let verbose = std::env::args().any(|arg| arg == "-v" || arg == "--verbose");
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .without_time()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("a global tracing subscriber is already installed");
    }

    // Department head counts for one office.
    let mut headcount = select(alias("employees", "e")?)?;
    headcount
        .column(Column::qualified("d", "name")?)?
        .column(exec("count", [Column::qualified("e", "id")?])?.alias("total")?)?
        .join(
            alias("departments", "d")?,
            [eq(Column::qualified("e", "dept")?, Column::qualified("d", "id")?)?],
        )?
        .eq(Column::qualified("e", "office")?)?
        .group_by(Column::qualified("d", "name")?)?
        .order_by("total", Direction::Desc)?
        .limit(10);

    // Everyone who ever drew a salary, current or former.
    let mut current = select("employees")?;
    current.columns(["firstname", "lastname"])?;
    let mut former = select("alumni")?;
    former.columns(["firstname", "lastname"])?;
    let everyone = current.union([former], false)?;

    let mut hire = insert("employees")?;
    hire.columns(["firstname", "lastname", "dept", "active"])?;

    let mut promote = update("employees")?;
    promote
        .set("title", "Lead")?
        .set("active", true)?
        .column("salary")?
        .eq("id")?;

    for dialect in [&GenericDialect as &dyn Dialect, &SqliteDialect] {
        println!("-- {}", dialect.name());
        println!("{};", headcount.render(dialect));
        println!("{};", everyone.render(dialect));
        println!("{};", hire.render(dialect));
        println!("{};", promote.render(dialect));
    }

    Ok(())
}
