//! Command execution against a simulation
//!
//! The executor owns what the interactive session accumulates around the
//! simulation proper: the action log (every executed command with its
//! resulting status) and the backup snapshot. Configuration errors come back
//! as `Err` for the caller to report; they never kill the session.

use crate::command::Command;
use crate::core::error::{Result, SimError};
use crate::plan::Plan;
use crate::policy::SelectionPolicy;
use crate::settlement::Settlement;
use crate::simulation::Simulation;
use std::fmt;

/// Outcome recorded in the action log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Completed,
    Error,
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActionStatus::Completed => "COMPLETED",
            ActionStatus::Error => "ERROR",
        };
        write!(f, "{}", label)
    }
}

/// One executed command and how it went
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub command: Command,
    pub status: ActionStatus,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.command, self.status)
    }
}

/// Dispatches commands, keeps the action log, holds the backup snapshot
#[derive(Debug, Default)]
pub struct CommandExecutor {
    backup: Option<Simulation>,
    log: Vec<LogEntry>,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    /// Execute one command, record it in the action log, and return the
    /// rendered output (if the command produces any)
    pub fn execute(&mut self, sim: &mut Simulation, command: Command) -> Result<Option<String>> {
        let result = self.dispatch(sim, &command);
        let status = match result {
            Ok(_) => ActionStatus::Completed,
            Err(_) => ActionStatus::Error,
        };
        if let Err(error) = &result {
            tracing::warn!(%command, %error, "command failed");
        }
        // The log command renders the entries before its own gets appended
        self.log.push(LogEntry { command, status });
        result
    }

    fn dispatch(&mut self, sim: &mut Simulation, command: &Command) -> Result<Option<String>> {
        match command {
            Command::AddSettlement {
                name,
                settlement_type,
            } => {
                sim.add_settlement(Settlement::new(name.clone(), *settlement_type))?;
                Ok(None)
            }
            Command::AddFacility(facility_type) => {
                sim.add_facility_type(facility_type.clone())?;
                Ok(None)
            }
            Command::AddPlan { settlement, policy } => {
                let policy = SelectionPolicy::from_code(policy)?;
                sim.add_plan(settlement, policy)?;
                Ok(None)
            }
            Command::Step { count } => {
                for _ in 0..*count {
                    sim.step();
                }
                Ok(None)
            }
            Command::PlanStatus { plan_id } => Ok(Some(sim.plan(*plan_id)?.to_string())),
            Command::ChangePolicy { plan_id, policy } => {
                let plan = sim.plan_mut(*plan_id)?;
                if plan.policy().code() == policy {
                    return Err(SimError::PolicyUnchanged(*plan_id, policy.clone()));
                }
                let new_policy = match policy.as_str() {
                    "bal" => balanced_from_standing(plan),
                    other => SelectionPolicy::from_code(other)?,
                };
                let output = format!(
                    "planID: {}\npreviousPolicy: {}\nnewPolicy: {}",
                    plan_id,
                    plan.policy().code(),
                    new_policy.code()
                );
                tracing::info!(
                    plan = *plan_id,
                    from = plan.policy().code(),
                    to = new_policy.code(),
                    "policy changed"
                );
                plan.set_selection_policy(new_policy);
                Ok(Some(output))
            }
            Command::Log => {
                let mut rendered = String::new();
                for entry in &self.log {
                    rendered.push_str(&entry.to_string());
                    rendered.push('\n');
                }
                Ok(Some(rendered))
            }
            Command::Backup => {
                self.backup = Some(sim.clone());
                Ok(None)
            }
            Command::Restore => {
                *sim = self.backup.clone().ok_or(SimError::NoBackup)?;
                Ok(None)
            }
            Command::Close => Ok(Some(sim.close())),
        }
    }
}

/// Seed a Balanced policy from a plan's current standing
///
/// One rule at every switch site: the plan's accumulated scores plus the
/// contributions of everything still under construction, so the new policy
/// continues from where the plan actually is rather than resetting to zero.
fn balanced_from_standing(plan: &Plan) -> SelectionPolicy {
    let mut life_quality = plan.life_quality_score();
    let mut economy = plan.economy_score();
    let mut environment = plan.environment_score();
    for facility in plan.under_construction() {
        life_quality += facility.life_quality_score();
        economy += facility.economy_score();
        environment += facility.environment_score();
    }
    SelectionPolicy::balanced(life_quality, economy, environment)
}
