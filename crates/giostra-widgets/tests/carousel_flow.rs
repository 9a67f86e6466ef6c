//! End-to-end widget flows: render into a hit-grid frame, feed mouse events
//! through the hit test, and watch state follow.

use giostra_core::event::{MouseButton, MouseEvent, MouseEventKind};
use giostra_core::geometry::Rect;
use giostra_render::frame::{Frame, HitId};
use giostra_widgets::StatefulWidget;
use giostra_widgets::carousel::{Card, Carousel, CarouselState};
use giostra_widgets::modal::{DetailModal, DetailModalState, ModalAction};
use giostra_widgets::mouse::MouseResult;
use web_time::Instant;

fn cards(n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| Card::new(format!("Card {i}")).body("lorem ipsum dolor sit amet"))
        .collect()
}

fn click(x: u16, y: u16) -> MouseEvent {
    MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y)
}

#[test]
fn chevron_click_through_hit_grid_advances() {
    let id = HitId::new(1);
    let carousel = Carousel::new(cards(5)).hit_id(id);
    let mut state = CarouselState::new(5, 1200, Instant::now());
    let mut frame = Frame::with_hit_grid(80, 10);
    let area = Rect::new(0, 0, 80, 10);
    carousel.render(area, &mut frame, &mut state);

    // Rightmost column holds the next chevron.
    let event = click(79, 4);
    let hit = frame.hit_test(event.x, event.y);
    assert!(hit.is_some());
    assert_eq!(state.handle_mouse(&event, hit, id), MouseResult::Selected(1));
    assert_eq!(state.position(), 1);
}

#[test]
fn dot_click_through_hit_grid_jumps() {
    let id = HitId::new(1);
    let carousel = Carousel::new(cards(5)).hit_id(id);
    let mut state = CarouselState::new(5, 1200, Instant::now());
    let mut frame = Frame::with_hit_grid(80, 10);
    let area = Rect::new(0, 0, 80, 10);
    carousel.render(area, &mut frame, &mut state);

    // 3 dots centered on the bottom row: find the last one and click it.
    let dots_y = 9;
    let last_dot_x = (0..80)
        .rev()
        .find(|&x| frame.hit_test(x, dots_y).is_some())
        .unwrap();
    let event = click(last_dot_x, dots_y);
    let hit = frame.hit_test(event.x, event.y);
    assert_eq!(state.handle_mouse(&event, hit, id), MouseResult::Selected(2));
    assert_eq!(state.position(), 2);

    // Re-render with the new state and the active dot moved.
    frame.clear();
    carousel.render(area, &mut frame, &mut state);
    let hit = frame.hit_test(last_dot_x, dots_y);
    let event = click(last_dot_x, dots_y);
    assert_eq!(
        state.handle_mouse(&event, hit, id),
        MouseResult::Activated(2)
    );
}

#[test]
fn card_click_opens_modal_and_backdrop_closes_it() {
    let carousel_id = HitId::new(1);
    let modal_id = HitId::new(2);
    let carousel = Carousel::new(cards(5)).hit_id(carousel_id);
    let mut carousel_state = CarouselState::new(5, 1200, Instant::now());
    let mut frame = Frame::with_hit_grid(80, 12);
    let area = Rect::new(0, 0, 80, 12);
    carousel.render(area, &mut frame, &mut carousel_state);

    // Click somewhere inside the first card.
    let hit = frame.hit_test(4, 1);
    let (_, region, data) = hit.unwrap();
    assert_eq!(region, giostra_widgets::carousel::CARD_HIT);
    let entry = data as usize;

    let mut modal_state = DetailModalState::new();
    modal_state.open(3);
    assert_eq!(entry, 0);
    assert!(modal_state.is_open());

    let modal = DetailModal::new("Card 0", vec!["slide one".into(), "slide two".into()])
        .hit_id(modal_id);
    frame.clear();
    modal.render(area, &mut frame, &mut modal_state);

    // Click the corner: backdrop, so the modal closes.
    let event = click(0, 0);
    let hit = frame.hit_test(0, 0);
    assert_eq!(
        modal_state.handle_mouse(&event, hit, modal_id),
        ModalAction::Closed
    );
    assert!(!modal_state.is_open());
}

#[test]
fn wheel_scroll_syncs_position_without_animation() {
    let id = HitId::new(1);
    let mut state = CarouselState::new(5, 1200, Instant::now());
    let wheel = MouseEvent::new(MouseEventKind::ScrollRight, 10, 3);
    state.handle_mouse(&wheel, None, id);
    state.handle_mouse(&wheel, None, id);
    assert_eq!(state.position(), 2);
    assert!(!state.is_animating());
    assert_eq!(state.scroll_offset(), 2.0 * state.card_stride());
}
