//! Operation table.
//!
//! Every supported operation is a variant of [`Operation`], and each variant
//! resolves to an immutable [`Plan`]: banner, precondition set, and the exact
//! external command lines to run, in order. Dispatch never branches on raw
//! strings.

use crate::shell::render;

/// Compose file used by `start-debug`.
pub const DEBUG_COMPOSE_FILE: &str = "docker-compose_debug.yml";

/// Database service name in the compose file.
pub const DATABASE_SERVICE: &str = "postgres";

/// Application service name in the compose file.
pub const BOT_SERVICE: &str = "stock-bot";

/// A supported operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Bring up every service, rebuilding images, detached.
    StartAll,
    /// Bring up the database, then the bot.
    StartBot,
    /// Bring up services from the debug compose file.
    StartDebug,
    /// Tear down all services.
    StopAll,
    /// Follow logs for one service, or all when `service` is `None`.
    Logs { service: Option<String> },
    /// List running service status.
    Status,
    /// Tear down with volumes/orphans, then prune unused resources.
    Clean,
}

/// A single external command invocation with a human description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// Program and arguments, executed without a shell.
    pub argv: Vec<String>,

    /// Human-readable description shown while the action runs.
    pub description: String,
}

impl Action {
    fn new(argv: &[&str], description: &str) -> Self {
        Self {
            argv: argv.iter().map(|s| s.to_string()).collect(),
            description: description.to_string(),
        }
    }

    /// The rendered command line, for display and error reporting.
    pub fn command_line(&self) -> String {
        render(&self.argv)
    }
}

/// Message block printed when every action of a plan succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// One-line summary.
    pub summary: &'static str,

    /// Informational lines (endpoints, follow-up hints).
    pub notes: Vec<String>,
}

/// Immutable execution plan for one operation.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Banner shown before anything runs.
    pub banner: &'static str,

    /// Whether the `.env` presence check applies (warn-only).
    pub check_env: bool,

    /// External actions, executed sequentially without abort-on-failure.
    pub actions: Vec<Action>,

    /// Printed only when every action succeeded.
    pub completion: Option<Completion>,
}

impl Operation {
    /// The operation name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::StartAll => "start-all",
            Operation::StartBot => "start-bot",
            Operation::StartDebug => "start-debug",
            Operation::StopAll => "stop-all",
            Operation::Logs { .. } => "logs",
            Operation::Status => "status",
            Operation::Clean => "clean",
        }
    }

    /// Name and one-line description for every operation, in listing order.
    pub fn summaries() -> &'static [(&'static str, &'static str)] {
        &[
            ("start-all", "Start every service"),
            ("start-bot", "Start only the bot service"),
            ("start-debug", "Start in debug mode"),
            ("stop-all", "Stop every service"),
            ("logs", "Follow logs (optionally for one service)"),
            ("status", "Show service status"),
            ("clean", "Clean up Docker resources"),
        ]
    }

    /// Resolve this operation to its execution plan.
    pub fn plan(&self) -> Plan {
        match self {
            Operation::StartAll => Plan {
                banner: "🐳 Starting all Docker services",
                check_env: true,
                actions: vec![Action::new(
                    &["docker-compose", "up", "-d", "--build"],
                    "Start all services (PostgreSQL + stock bot + sync service)",
                )],
                completion: Some(Completion {
                    summary: "All services started!",
                    notes: vec![
                        "PostgreSQL: localhost:5432".to_string(),
                        "Stock bot: localhost:8080".to_string(),
                        "Follow logs with: dockhand logs".to_string(),
                    ],
                }),
            },
            Operation::StartBot => Plan {
                banner: "🤖 Starting the stock bot",
                check_env: true,
                actions: vec![
                    Action::new(
                        &["docker-compose", "up", "-d", DATABASE_SERVICE],
                        "Start the PostgreSQL database",
                    ),
                    Action::new(
                        &["docker-compose", "up", "-d", BOT_SERVICE],
                        "Start the stock bot application",
                    ),
                ],
                completion: Some(Completion {
                    summary: "Stock bot started!",
                    notes: vec!["Service endpoint: localhost:8080".to_string()],
                }),
            },
            Operation::StartDebug => Plan {
                banner: "🐛 Starting debug mode",
                check_env: true,
                actions: vec![Action::new(
                    &["docker-compose", "-f", DEBUG_COMPOSE_FILE, "up", "-d", "--build"],
                    "Start services in debug mode",
                )],
                completion: Some(Completion {
                    summary: "Debug mode started!",
                    notes: vec![
                        format!("Using {}", DEBUG_COMPOSE_FILE),
                        format!(
                            "Follow logs with: docker-compose -f {} logs -f",
                            DEBUG_COMPOSE_FILE
                        ),
                    ],
                }),
            },
            Operation::StopAll => Plan {
                banner: "🛑 Stopping all Docker services",
                check_env: false,
                actions: vec![Action::new(&["docker-compose", "down"], "Stop all services")],
                completion: Some(Completion {
                    summary: "All services stopped!",
                    notes: Vec::new(),
                }),
            },
            Operation::Logs { service } => {
                let (argv, description) = match service {
                    Some(name) => (
                        vec![
                            "docker-compose".to_string(),
                            "logs".to_string(),
                            "-f".to_string(),
                            name.clone(),
                        ],
                        format!("Follow logs for {}", name),
                    ),
                    None => (
                        vec![
                            "docker-compose".to_string(),
                            "logs".to_string(),
                            "-f".to_string(),
                        ],
                        "Follow logs for all services".to_string(),
                    ),
                };

                Plan {
                    banner: "📋 Service logs",
                    check_env: false,
                    actions: vec![Action { argv, description }],
                    completion: None,
                }
            }
            Operation::Status => Plan {
                banner: "📊 Service status",
                check_env: false,
                actions: vec![Action::new(&["docker-compose", "ps"], "List service status")],
                completion: None,
            },
            Operation::Clean => Plan {
                banner: "🧹 Cleaning Docker resources",
                check_env: false,
                actions: vec![
                    Action::new(
                        &["docker-compose", "down", "-v", "--remove-orphans"],
                        "Stop services and remove containers and volumes",
                    ),
                    Action::new(
                        &["docker", "system", "prune", "-f"],
                        "Prune unused Docker resources",
                    ),
                ],
                completion: Some(Completion {
                    summary: "Cleanup complete!",
                    notes: Vec::new(),
                }),
            },
        }
    }
}
