use client_core::{RequestStatus, RequestView};
use shared::domain::Idea;

pub fn render_text(view: &RequestView) -> String {
    match view.status {
        RequestStatus::Idle => String::new(),
        RequestStatus::Pending => "Generando ideas...".to_string(),
        RequestStatus::Failed => view.error_message.clone().unwrap_or_default(),
        RequestStatus::Success if view.ideas.is_empty() => {
            "No se generaron ideas.".to_string()
        }
        RequestStatus::Success => view
            .ideas
            .iter()
            .enumerate()
            .map(|(i, idea)| render_idea(i + 1, idea))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn render_idea(position: usize, idea: &Idea) -> String {
    format!(
        "{position}. {}\n   [{}]\n   {}",
        idea.title, idea.category, idea.description
    )
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
