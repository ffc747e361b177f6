use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_explorer::{AppError, DetailView, FilterField, Session, SortOption};

/// Browse a JSON course catalog from the command line.
#[derive(Debug, Parser)]
#[command(name = "course_explorer")]
struct Args {
    /// Path to the JSON course document.
    file: PathBuf,

    /// Only show courses from this department.
    #[arg(long)]
    department: Option<String>,

    /// Only show courses at this level.
    #[arg(long)]
    level: Option<String>,

    /// Only show courses worth this many credits.
    #[arg(long)]
    credits: Option<String>,

    /// Only show courses taught by this instructor.
    #[arg(long)]
    instructor: Option<String>,

    /// Sort order: none, id-ascending, id-descending, title-ascending,
    /// title-descending, semester-earliest or semester-latest.
    #[arg(long, default_value = "none")]
    sort: SortOption,

    /// Show the details of this course id.
    #[arg(long)]
    select: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "course_explorer=warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let mut session = Session::new();
    let count = session.load_file(&args.file).await?;
    println!("Loaded {count} courses from {}", args.file.display());

    if let Some(department) = &args.department {
        session.set_filter(FilterField::Department, department)?;
    }
    if let Some(level) = &args.level {
        session.set_filter(FilterField::Level, level)?;
    }
    if let Some(credits) = &args.credits {
        session.set_filter(FilterField::Credits, credits)?;
    }
    if let Some(instructor) = &args.instructor {
        session.set_filter(FilterField::Instructor, instructor)?;
    }
    session.set_sort(args.sort);
    if let Some(id) = &args.select {
        session.select_course(id)?;
    }

    let list = session.list_view();
    println!();
    match &list.placeholder {
        Some(message) => println!("{message}"),
        None => {
            for entry in &list.entries {
                let marker = if entry.selected { ">" } else { " " };
                println!("{marker} {}", entry.id);
            }
        }
    }

    println!();
    match session.detail_view() {
        DetailView::Placeholder { message } => println!("{message}"),
        DetailView::Course(detail) => {
            println!("{}", detail.id);
            println!("Title: {}", detail.title);
            println!("Department: {}", detail.department);
            println!("Level: {}", detail.level);
            println!("Credits: {}", detail.credits);
            println!("Instructor: {}", detail.instructor);
            println!("Semester: {}", detail.semester);
            println!("Description: {}", detail.description);
            if !detail.assignments.is_empty() {
                println!("Assignments:");
                for assignment in &detail.assignments {
                    println!("  {} (due {})", assignment.title, assignment.due_date);
                }
            }
        }
    }

    Ok(())
}
