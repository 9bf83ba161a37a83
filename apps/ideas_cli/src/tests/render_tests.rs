use super::*;
use client_core::RequestState;
use shared::domain::{Idea, IdeaId};

#[test]
fn renders_numbered_ideas() {
    let view = RequestView::from(&RequestState::Success(vec![
        Idea {
            id: IdeaId::generate(),
            title: "5 Tips para crecer en Instagram".into(),
            description: "Graba un video corto explicando...".into(),
            category: "Marketing | Reels".into(),
        },
        Idea {
            id: IdeaId::generate(),
            title: "Cómo cerrar más ventas".into(),
            description: "Crea un carrusel con estos pasos...".into(),
            category: "Ventas | Carousel".into(),
        },
    ]));

    let text = render_text(&view);
    assert!(text.starts_with("1. 5 Tips para crecer en Instagram\n   [Marketing | Reels]"));
    assert!(text.contains("\n\n2. Cómo cerrar más ventas"));
}

#[test]
fn renders_error_message_verbatim() {
    let view = RequestView::from(&RequestState::Failed("Error del servidor: 500".into()));
    assert_eq!(render_text(&view), "Error del servidor: 500");
}

#[test]
fn empty_success_has_placeholder() {
    let view = RequestView::from(&RequestState::Success(Vec::new()));
    assert_eq!(render_text(&view), "No se generaron ideas.");
}

#[test]
fn single_idea_layout() {
    let idea = Idea {
        id: IdeaId::generate(),
        title: "Ramos de temporada".into(),
        description: "Fotografía cada arreglo...".into(),
        category: "Producto | Post".into(),
    };
    assert_eq!(
        render_idea(3, &idea),
        "3. Ramos de temporada\n   [Producto | Post]\n   Fotografía cada arreglo..."
    );
}
