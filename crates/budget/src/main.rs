use std::path::PathBuf;

use budget::app::parse_kind;
use budget::data::DataDirectory;
use budget::state::Action;
use budget::{App, init_logging};
use budget_core::model::{
    DebtEntry, DebtType, ExpenseEntry, GoalEntry, IncomeEntry, ScenarioKey,
};
use budget_core::simulation::{PayoffPolicy, SimulationConfig};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "budget")]
#[command(about = "A personal budget dashboard with debt payoff projections")]
struct Args {
    /// Path to the data directory (default: ~/.budget/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dashboard metrics for a scenario
    Summary {
        #[arg(short, long)]
        scenario: Option<ScenarioKey>,
    },
    /// Debt estimates, payoff schedule and policy comparison
    Debts {
        #[arg(short, long)]
        scenario: Option<ScenarioKey>,
        /// independent or cascade
        #[arg(short, long)]
        policy: Option<PayoffPolicy>,
        /// Simulation horizon in months
        #[arg(long)]
        horizon: Option<u32>,
    },
    /// Savings goal projections
    Goals {
        #[arg(short, long)]
        scenario: Option<ScenarioKey>,
    },
    AddIncome {
        name: String,
        amount: f64,
        #[arg(long, default_value = "salary")]
        kind: String,
    },
    AddExpense {
        name: String,
        amount: f64,
        #[arg(long, default_value = "other")]
        category: String,
        /// Same amount every month
        #[arg(long)]
        fixed: bool,
    },
    AddDebt {
        name: String,
        balance: f64,
        #[arg(long, default_value = "credit_card")]
        kind: String,
        /// Annual rate in percent (default: typical rate for the kind)
        #[arg(long)]
        rate: Option<f64>,
        #[arg(long, default_value_t = 0.0)]
        minimum: f64,
        #[arg(long, default_value_t = 0.0)]
        extra: f64,
    },
    AddGoal {
        name: String,
        target: f64,
        #[arg(long, default_value = "other")]
        kind: String,
        #[arg(long, default_value_t = 0.0)]
        current: f64,
        #[arg(long, default_value_t = 0.0)]
        contribution: f64,
    },
    /// Remove a record by id
    Delete { kind: RecordKind, id: String },
    /// Set debt priority, highest first
    ReorderDebts { ids: Vec<String> },
    /// Set goal priority, highest first
    ReorderGoals { ids: Vec<String> },
    /// Switch the active scenario
    Use { scenario: ScenarioKey },
    /// Toggle between dark and light theme
    Theme,
    /// Write both scenarios to a JSON file
    Export {
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Replace both scenarios from a JSON file
    Import { path: PathBuf },
    /// Restore the sample data
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RecordKind {
    Income,
    Expense,
    Debt,
    Goal,
}

/// Money typed on the command line is clamped at zero
fn non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

fn run(app: &mut App, command: Command) -> color_eyre::Result<String> {
    let output = match command {
        Command::Summary { scenario } => app.summary(scenario),
        Command::Debts {
            scenario,
            policy,
            horizon,
        } => {
            let defaults = app.config().simulation();
            let config = SimulationConfig::new(
                horizon.unwrap_or(defaults.horizon_months),
                policy.unwrap_or(defaults.policy),
            );
            app.debts(scenario, Some(config))
        }
        Command::Goals { scenario } => app.goals(scenario),
        Command::AddIncome { name, amount, kind } => {
            app.dispatch(Action::AddIncome(IncomeEntry {
                name: name.clone(),
                kind: parse_kind(&kind),
                amount: non_negative(amount),
                ..Default::default()
            }))?;
            format!("Added income {name}")
        }
        Command::AddExpense {
            name,
            amount,
            category,
            fixed,
        } => {
            app.dispatch(Action::AddExpense(ExpenseEntry {
                name: name.clone(),
                category: parse_kind(&category),
                amount: non_negative(amount),
                is_fixed: fixed,
                ..Default::default()
            }))?;
            format!("Added expense {name}")
        }
        Command::AddDebt {
            name,
            balance,
            kind,
            rate,
            minimum,
            extra,
        } => {
            let kind: DebtType = parse_kind(&kind);
            app.dispatch(Action::AddDebt(DebtEntry {
                name: name.clone(),
                kind,
                balance: non_negative(balance),
                interest_rate: non_negative(rate.unwrap_or_else(|| kind.typical_rate())),
                minimum_payment: non_negative(minimum),
                extra_payment: non_negative(extra),
                ..Default::default()
            }))?;
            format!("Added debt {name}")
        }
        Command::AddGoal {
            name,
            target,
            kind,
            current,
            contribution,
        } => {
            app.dispatch(Action::AddGoal(GoalEntry {
                name: name.clone(),
                kind: parse_kind(&kind),
                target_amount: non_negative(target),
                current_amount: non_negative(current),
                monthly_contribution: non_negative(contribution),
                ..Default::default()
            }))?;
            format!("Added goal {name}")
        }
        Command::Delete { kind, id } => {
            let action = match kind {
                RecordKind::Income => Action::DeleteIncome(id.clone()),
                RecordKind::Expense => Action::DeleteExpense(id.clone()),
                RecordKind::Debt => Action::DeleteDebt(id.clone()),
                RecordKind::Goal => Action::DeleteGoal(id.clone()),
            };
            app.dispatch(action)?;
            format!("Deleted {id}")
        }
        Command::ReorderDebts { ids } => {
            app.dispatch(Action::ReorderDebts(ids))?;
            app.debts(None, None)
        }
        Command::ReorderGoals { ids } => {
            app.dispatch(Action::ReorderGoals(ids))?;
            app.goals(None)
        }
        Command::Use { scenario } => {
            app.use_scenario(scenario)?;
            format!("Active scenario: {}", app.state().active().name)
        }
        Command::Theme => {
            app.dispatch(Action::ToggleTheme)?;
            format!("Theme: {}", app.state().data.theme.as_str())
        }
        Command::Export { out } => {
            let path = app.export(out, jiff::Timestamp::now())?;
            format!("Exported to {}", path.display())
        }
        Command::Import { path } => {
            app.import(&path)?;
            format!("Imported {}", path.display())
        }
        Command::Reset => {
            app.reset()?;
            "Data reset to defaults".to_string()
        }
    };
    Ok(output)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(DataDirectory::default_path);

    init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_data_dir(data_dir)?;
    let command = args.command.unwrap_or(Command::Summary { scenario: None });
    let output = run(&mut app, command)?;
    println!("{output}");

    tracing::info!("Command finished");
    Ok(())
}
