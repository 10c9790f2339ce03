use crate::app::{AppContext, Result, TugasError};
use crate::cli::ListArgs;
use crate::domain::{short_fields, Draft, Homework, HomeworkDraft, ListItem, Task, TaskDraft};
use crate::list::{ItemListManager, ListError};

/// One-line rendering of an item for terminal output.
pub trait Render: ListItem {
    fn render(&self) -> String;
}

impl Render for Task {
    fn render(&self) -> String {
        format!("{} {}  ({})", checkbox(self), self.title, self.id)
    }
}

impl Render for Homework {
    fn render(&self) -> String {
        format!(
            "{} [{}] {} - due {}  ({})",
            checkbox(self),
            self.subject,
            self.title,
            self.deadline,
            self.id
        )
    }
}

fn checkbox<T: ListItem>(item: &T) -> &'static str {
    if item.is_completed() {
        "[x]"
    } else {
        "[ ]"
    }
}

pub async fn add_task(ctx: &AppContext, title: &str) -> Result<()> {
    let mut tasks = ctx.tasks().await?;
    tasks.set_draft(TaskDraft::new(title));
    let task = tasks.add().await.map_err(|e| describe(&tasks, e))?;
    println!("Added task: {}", task.render());
    warn_on_store_error(&mut tasks);
    Ok(())
}

pub async fn add_homework(ctx: &AppContext, draft: HomeworkDraft) -> Result<()> {
    let mut homeworks = ctx.homeworks().await?;
    homeworks.set_draft(draft);
    let hw = homeworks.add().await.map_err(|e| describe(&homeworks, e))?;
    println!("Added homework: {}", hw.render());
    warn_on_store_error(&mut homeworks);
    Ok(())
}

pub async fn edit_task(ctx: &AppContext, id: &str, title: &str) -> Result<()> {
    let mut tasks = ctx.tasks().await?;
    if !tasks.start_edit(id) {
        return Err(TugasError::ItemNotFound(id.to_string()));
    }
    tasks.draft_mut().title = title.to_string();
    let task = tasks.commit_edit().await.map_err(|e| describe(&tasks, e))?;
    println!("Updated task: {}", task.render());
    warn_on_store_error(&mut tasks);
    Ok(())
}

/// Fields left as `None` keep the value loaded into the draft.
pub async fn edit_homework(
    ctx: &AppContext,
    id: &str,
    subject: Option<String>,
    title: Option<String>,
    deadline: Option<String>,
) -> Result<()> {
    let mut homeworks = ctx.homeworks().await?;
    if !homeworks.start_edit(id) {
        return Err(TugasError::ItemNotFound(id.to_string()));
    }

    let draft = homeworks.draft_mut();
    if let Some(subject) = subject {
        draft.subject = subject;
    }
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(deadline) = deadline {
        draft.deadline = deadline;
    }

    let hw = homeworks
        .commit_edit()
        .await
        .map_err(|e| describe(&homeworks, e))?;
    println!("Updated homework: {}", hw.render());
    warn_on_store_error(&mut homeworks);
    Ok(())
}

pub async fn toggle<T: Render>(ctx: &AppContext, id: &str) -> Result<()> {
    let mut list = ctx.open_list::<T>().await?;
    let pending = list
        .toggle(id)
        .await?
        .ok_or_else(|| TugasError::ItemNotFound(id.to_string()))?;

    let status = if pending { "pending" } else { "done" };
    println!("Marked {} {} as {}", T::LABEL, id, status);
    warn_on_store_error(&mut list);
    Ok(())
}

pub async fn remove<T: Render>(ctx: &AppContext, id: &str) -> Result<()> {
    let mut list = ctx.open_list::<T>().await?;
    let removed = list
        .remove(id)
        .await?
        .ok_or_else(|| TugasError::ItemNotFound(id.to_string()))?;

    println!("Removed {}: {}", T::LABEL, removed.render());
    warn_on_store_error(&mut list);
    Ok(())
}

pub async fn list<T: Render>(ctx: &AppContext, args: ListArgs) -> Result<()> {
    let list = ctx.open_list::<T>().await?;
    let lines = render_list(list.items(), args);

    if lines.is_empty() {
        println!("No {} entries", T::LABEL);
        return Ok(());
    }
    for line in lines {
        println!("{}", line);
    }
    println!(
        "{} pending, {} done",
        list.pending_count(),
        list.completed_count()
    );
    Ok(())
}

pub async fn status(ctx: &AppContext) -> Result<()> {
    let tasks = ctx.tasks().await?;
    let homeworks = ctx.homeworks().await?;

    match &ctx.location {
        Some(path) => println!("Data: {}", path.display()),
        None => println!("Data: in memory"),
    }
    println!(
        "Tasks: {} ({} pending)",
        tasks.len(),
        tasks.pending_count()
    );
    println!(
        "Homework: {} ({} pending)",
        homeworks.len(),
        homeworks.pending_count()
    );
    Ok(())
}

/// Lines for the items that pass the filter, in list order.
pub fn render_list<T: Render>(items: &[T], args: ListArgs) -> Vec<String> {
    items
        .iter()
        .filter(|item| {
            if args.pending {
                !item.is_completed()
            } else if args.completed {
                item.is_completed()
            } else {
                true
            }
        })
        .map(|item| item.render())
        .collect()
}

/// Turn a validation failure into a message naming the offending fields.
fn describe<T: ListItem>(list: &ItemListManager<T>, err: ListError) -> TugasError {
    match err {
        ListError::Validation(e) => {
            let fields = short_fields(list.draft(), list.min_length());
            let mut message = e.user_message(list.min_length());
            if !fields.is_empty() && fields.len() < list.draft().fields().len() {
                message.push_str(&format!(" Check: {}.", fields.join(", ")));
            }
            TugasError::Other(message)
        }
        other => other.into(),
    }
}

fn warn_on_store_error<T: ListItem>(list: &mut ItemListManager<T>) {
    if let Some(e) = list.take_store_error() {
        eprintln!("Warning: changes were not saved: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, title: &str, state: bool) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            state,
        }
    }

    #[test]
    fn test_render_task() {
        assert_eq!(task("1", "Buy milk", true).render(), "[ ] Buy milk  (1)");
        assert_eq!(task("2", "Buy eggs", false).render(), "[x] Buy eggs  (2)");
    }

    #[test]
    fn test_render_homework() {
        let hw = Homework {
            id: "9".into(),
            subject: "Math".into(),
            title: "Algebra".into(),
            deadline: "Monday".into(),
            state: true,
        };
        assert_eq!(hw.render(), "[ ] [Math] Algebra - due Monday  (9)");
    }

    #[test]
    fn test_render_list_filters() {
        let items = vec![task("1", "One", true), task("2", "Two", false)];

        assert_eq!(render_list(&items, ListArgs::default()).len(), 2);

        let pending = render_list(
            &items,
            ListArgs {
                pending: true,
                completed: false,
            },
        );
        assert_eq!(pending, vec!["[ ] One  (1)"]);

        let completed = render_list(
            &items,
            ListArgs {
                pending: false,
                completed: true,
            },
        );
        assert_eq!(completed, vec!["[x] Two  (2)"]);
    }

    #[tokio::test]
    async fn test_edit_unknown_task() {
        let ctx = AppContext::in_memory(Default::default()).unwrap();
        let err = edit_task(&ctx, "missing", "New title").await.unwrap_err();
        assert!(matches!(err, TugasError::ItemNotFound(_)));
    }

    #[tokio::test]
    async fn test_add_short_homework_names_fields() {
        let ctx = AppContext::in_memory(Default::default()).unwrap();
        let err = add_homework(&ctx, HomeworkDraft::new("Math", "Al", "Monday"))
            .await
            .unwrap_err();
        match err {
            TugasError::Other(message) => assert!(message.contains("title")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_edit_homework_keeps_unspecified_fields() {
        let ctx = AppContext::in_memory(Default::default()).unwrap();
        add_homework(&ctx, HomeworkDraft::new("Math", "Algebra", "Monday"))
            .await
            .unwrap();
        let id = ctx.homeworks().await.unwrap().items()[0].id.clone();

        edit_homework(&ctx, &id, None, None, Some("Friday".into()))
            .await
            .unwrap();

        let homeworks = ctx.homeworks().await.unwrap();
        let hw = &homeworks.items()[0];
        assert_eq!(hw.subject, "Math");
        assert_eq!(hw.title, "Algebra");
        assert_eq!(hw.deadline, "Friday");
    }

    #[tokio::test]
    async fn test_toggle_and_remove_unknown_ids() {
        let ctx = AppContext::in_memory(Default::default()).unwrap();
        assert!(matches!(
            toggle::<Task>(&ctx, "nope").await,
            Err(TugasError::ItemNotFound(_))
        ));
        assert!(matches!(
            remove::<Homework>(&ctx, "nope").await,
            Err(TugasError::ItemNotFound(_))
        ));
    }
}
