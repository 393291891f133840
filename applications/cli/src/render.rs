/// Plain-text rendering of dashboard state
use tasklist_client::TaskApi;
use tasklist_core::{timestamp, Task, TaskStats};
use tasklist_dashboard::{Dashboard, Notification};

pub fn list<A: TaskApi>(dashboard: &Dashboard<A>) {
    if let Some(empty) = dashboard.empty_state() {
        println!("{}", empty.message());
        return;
    }

    for row in dashboard.rows() {
        let mut text = line(row.task);
        if !row.can_modify {
            text.push_str("  (read-only)");
        }
        println!("{}", text);
    }
}

pub fn stats(stats: &TaskStats) {
    println!("Total:     {}", stats.total);
    println!("Completed: {}", stats.completed);
    println!("Pending:   {}", stats.pending);
    println!("Mine:      {}", stats.mine);
}

pub fn notifications(notes: &[Notification]) {
    for note in notes {
        if note.is_error() {
            eprintln!("error: {}", note);
        } else {
            println!("{}", note);
        }
    }
}

/// `[x] 1700000000000  alice  buy milk  (2023-11-14T22:13:20.000Z, edited)`
pub fn line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let edited = if task.is_edited() { ", edited" } else { "" };
    let stamp = task
        .updated_at
        .or(task.created_at)
        .map_or_else(|| "undated".to_string(), |ts| timestamp::format(&ts));
    format!(
        "[{}] {}  {}  {}  ({}{})",
        mark, task.id, task.author, task.text, stamp, edited
    )
}
