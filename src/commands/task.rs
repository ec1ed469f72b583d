use super::parse_date;
use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{NewTask, Priority, TaskFilter},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a task
    Add {
        /// Task title; prompted for when omitted
        title: Option<String>,

        #[arg(short, long, default_value = "")]
        description: String,

        /// Due date, YYYY-MM-DD or 'today'
        #[arg(long)]
        due: Option<String>,

        /// high, medium or low
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Book new focus sessions against this task
        #[arg(short, long)]
        activate: bool,
    },
    /// List tasks, open ones by default
    List {
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,

        /// Only completed tasks
        #[arg(short, long, conflicts_with = "all")]
        completed: bool,
    },
    /// Mark a task done, or reopen it
    Toggle { id: String },
    /// Delete a task
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Book new focus sessions against a task
    Activate { id: String },
    /// Stop booking focus sessions against a task
    Deactivate,
}

pub fn cmd(task_args: TaskArgs) -> Result<()> {
    let tasks = Tasks::new()?;

    match task_args.command {
        TaskCommand::Add {
            title,
            description,
            due,
            priority,
            activate,
        } => {
            let title = match title {
                Some(title) => title,
                None => Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptTaskTitle.to_string())
                    .interact_text()?,
            };
            let today = Local::now().date_naive();
            let new_task = NewTask {
                description,
                due_date: due.map(|d| parse_date(&d, today)).transpose()?,
                priority,
                ..NewTask::new(&title)
            };

            let task = tasks.insert(&new_task)?;
            msg_success!(Message::TaskCreated(task.title.clone()));
            if activate {
                set_active_task(Some(task.id.clone()))?;
                msg_info!(Message::TaskActivated(task.title));
            }
        }
        TaskCommand::List { all, completed } => {
            let filter = match (all, completed) {
                (true, _) => TaskFilter::All,
                (_, true) => TaskFilter::Completed,
                _ => TaskFilter::Open,
            };
            let list = tasks.fetch(filter)?;
            if list.is_empty() {
                msg_info!(Message::TasksNotFound);
                return Ok(());
            }

            let config = Config::read()?;
            msg_print!(Message::TasksHeader, true);
            View::tasks(&list, config.active_task.as_deref(), Local::now().date_naive());
        }
        TaskCommand::Toggle { id } => {
            let task = tasks.resolve(&id)?;
            let task = tasks.toggle(&task.id)?;
            if task.completed {
                msg_success!(Message::TaskCompleted(task.title));
            } else {
                msg_success!(Message::TaskReopened(task.title));
            }
        }
        TaskCommand::Delete { id, yes } => {
            let task = tasks.resolve(&id)?;
            let confirmed = yes
                || Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
                    .default(false)
                    .interact()?;
            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }

            tasks.delete(&task.id)?;
            if Config::read()?.active_task.as_deref() == Some(task.id.as_str()) {
                set_active_task(None)?;
            }
            msg_success!(Message::TaskDeleted(task.title));
        }
        TaskCommand::Activate { id } => {
            let task = tasks.resolve(&id)?;
            set_active_task(Some(task.id))?;
            msg_success!(Message::TaskActivated(task.title));
        }
        TaskCommand::Deactivate => {
            set_active_task(None)?;
            msg_success!(Message::TaskDeactivated);
        }
    }

    Ok(())
}

fn set_active_task(task_id: Option<String>) -> Result<()> {
    let mut config = Config::read()?;
    config.active_task = task_id;
    config.save()
}
