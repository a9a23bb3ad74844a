// src/views/counter_grid.rs
//
// The grid of stat cards. One AnimatedNumber per item, laid out row by row
// in content space, in the order the items were supplied.

use tracing::info;

use crate::animation::{AnimatedNumber, Capabilities};
use crate::config::{AnimationConfig, LayoutConfig};
use crate::models::{Rect, StatItem};
use crate::visibility::ElementId;

/// What a card shows on a given frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub label: String,
    pub text: String,
    pub bounds: Rect,
}

pub struct CounterCard {
    pub element: ElementId,
    pub label: String,
    pub bounds: Rect,
    pub number: AnimatedNumber,
}

impl CounterCard {
    pub fn view(&self) -> CardView {
        CardView {
            label: self.label.clone(),
            text: self.number.text(),
            bounds: self.bounds,
        }
    }
}

pub struct CounterGrid {
    cards: Vec<CounterCard>,
    layout: LayoutConfig,
}

impl CounterGrid {
    pub fn mount(
        items: &[StatItem],
        layout: LayoutConfig,
        animation: AnimationConfig,
        capabilities: &Capabilities,
    ) -> Self {
        let cards: Vec<CounterCard> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let element = ElementId(index);
                CounterCard {
                    element,
                    label: item.label.clone(),
                    bounds: card_bounds(index, &layout),
                    number: AnimatedNumber::mount(
                        element,
                        item.value,
                        &item.suffix,
                        animation,
                        capabilities,
                    ),
                }
            })
            .collect();

        info!("Mounted counter grid with {} cards", cards.len());
        Self { cards, layout }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[CounterCard] {
        &self.cards
    }

    pub fn bounds_of(&self, element: ElementId) -> Option<Rect> {
        self.cards
            .iter()
            .find(|card| card.element == element)
            .map(|card| card.bounds)
    }

    pub fn render(&self) -> Vec<CardView> {
        self.cards.iter().map(CounterCard::view).collect()
    }

    pub fn all_finished(&self) -> bool {
        self.cards.iter().all(|card| card.number.is_finished())
    }

    pub fn rows(&self) -> usize {
        self.cards.len().div_ceil(columns(&self.layout))
    }

    pub fn width(&self) -> f32 {
        let columns = columns(&self.layout).min(self.cards.len());
        span(columns, self.layout.card_width, self.layout.gap)
    }

    /// Total scrollable height: top offset, the rows, and the bottom padding.
    pub fn content_height(&self) -> f32 {
        self.layout.top_offset
            + span(self.rows(), self.layout.card_height, self.layout.gap)
            + self.layout.bottom_padding
    }

    pub fn unmount(&mut self) {
        for card in &mut self.cards {
            card.number.unmount();
        }
    }
}

fn columns(layout: &LayoutConfig) -> usize {
    layout.columns.max(1)
}

// Length of `count` cells of `size` separated by `gap`
fn span(count: usize, size: f32, gap: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    count as f32 * size + (count - 1) as f32 * gap
}

pub fn card_bounds(index: usize, layout: &LayoutConfig) -> Rect {
    let columns = columns(layout);
    let column = index % columns;
    let row = index / columns;

    Rect::new(
        column as f32 * (layout.card_width + layout.gap),
        layout.top_offset + row as f32 * (layout.card_height + layout.gap),
        layout.card_width,
        layout.card_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FrameQueue;
    use crate::testing::{ManualClock, RecordingObserver};
    use crate::visibility::ViewportObserver;
    use std::rc::Rc;

    fn sample_items() -> Vec<StatItem> {
        vec![
            StatItem::new(15, "+", "Years of Experience"),
            StatItem::new(200, "+", "Satisfied Clients"),
            StatItem::new(108, "+", "Completed Projects"),
            StatItem::new(90, "%", "Client Retention Rate"),
            StatItem::new(3, "", "  Offices, worldwide  "),
        ]
    }

    fn recording_capabilities() -> (Rc<RecordingObserver>, Rc<FrameQueue>, Capabilities) {
        let observer = Rc::new(RecordingObserver::default());
        let frames = Rc::new(FrameQueue::new());
        let capabilities = Capabilities {
            observer: observer.clone(),
            scheduler: frames.clone(),
            clock: Rc::new(ManualClock::default()),
        };
        (observer, frames, capabilities)
    }

    #[test]
    fn test_one_card_per_item_in_order() {
        let (_, _, capabilities) = recording_capabilities();
        let items = sample_items();
        let grid = CounterGrid::mount(
            &items,
            LayoutConfig::default(),
            AnimationConfig::default(),
            &capabilities,
        );

        let views = grid.render();
        assert_eq!(views.len(), items.len());
        for (view, item) in views.iter().zip(&items) {
            assert_eq!(view.label, item.label);
            assert_eq!(view.text, format!("0{}", item.suffix));
        }
    }

    #[test]
    fn test_empty_grid() {
        let (observer, _, capabilities) = recording_capabilities();
        let grid = CounterGrid::mount(
            &[],
            LayoutConfig::default(),
            AnimationConfig::default(),
            &capabilities,
        );

        assert!(grid.is_empty());
        assert!(grid.render().is_empty());
        assert_eq!(grid.rows(), 0);
        assert_eq!(grid.width(), 0.0);
        assert_eq!(observer.subscribe_count(), 0);
    }

    #[test]
    fn test_card_layout() {
        let layout = LayoutConfig {
            columns: 4,
            card_width: 100.0,
            card_height: 50.0,
            gap: 10.0,
            top_offset: 200.0,
            bottom_padding: 30.0,
        };

        let tests = vec![
            (0, Rect::new(0.0, 200.0, 100.0, 50.0)),
            (3, Rect::new(330.0, 200.0, 100.0, 50.0)),
            (4, Rect::new(0.0, 260.0, 100.0, 50.0)),
            (6, Rect::new(220.0, 260.0, 100.0, 50.0)),
        ];
        for (index, expected) in tests {
            assert_eq!(card_bounds(index, &layout), expected, "Failed for card {}", index);
        }

        let (_, _, capabilities) = recording_capabilities();
        let grid = CounterGrid::mount(
            &sample_items(),
            layout,
            AnimationConfig::default(),
            &capabilities,
        );
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.width(), 430.0);
        assert_eq!(grid.content_height(), 200.0 + 110.0 + 30.0);
        assert_eq!(grid.bounds_of(ElementId(4)), Some(Rect::new(0.0, 260.0, 100.0, 50.0)));
        assert_eq!(grid.bounds_of(ElementId(5)), None);
    }

    #[test]
    fn test_zero_columns_falls_back_to_one() {
        let layout = LayoutConfig {
            columns: 0,
            ..LayoutConfig::default()
        };
        assert_eq!(card_bounds(2, &layout).x, 0.0);
    }

    #[test]
    fn test_cards_animate_independently() {
        let (observer, frames, capabilities) = recording_capabilities();
        let grid = CounterGrid::mount(
            &sample_items(),
            LayoutConfig::default(),
            AnimationConfig::default(),
            &capabilities,
        );

        observer.emit(ElementId(1), 1.0);
        frames.run_frame(0.0);
        frames.run_frame(2000.0);

        let texts: Vec<String> = grid.render().into_iter().map(|view| view.text).collect();
        assert_eq!(texts, vec!["0+", "200+", "0+", "0%", "0"]);
        assert!(!grid.all_finished());
    }

    #[test]
    fn test_unmount_releases_every_subscription() {
        let (observer, _, capabilities) = recording_capabilities();
        let mut grid = CounterGrid::mount(
            &sample_items(),
            LayoutConfig::default(),
            AnimationConfig::default(),
            &capabilities,
        );
        observer.emit(ElementId(0), 1.0);
        assert_eq!(observer.active(), 5);

        grid.unmount();
        assert_eq!(observer.subscribe_count(), 5);
        assert_eq!(observer.unsubscribe_count(), 5);
        drop(grid);
        assert_eq!(observer.unsubscribe_count(), 5);
    }

    #[test]
    fn test_scrolling_reveals_rows() {
        let observer = Rc::new(ViewportObserver::new());
        let frames = Rc::new(FrameQueue::new());
        let capabilities = Capabilities {
            observer: observer.clone(),
            scheduler: frames.clone(),
            clock: Rc::new(ManualClock::default()),
        };
        let layout = LayoutConfig {
            columns: 4,
            card_width: 100.0,
            card_height: 100.0,
            gap: 0.0,
            top_offset: 1000.0,
            bottom_padding: 0.0,
        };
        let grid = CounterGrid::mount(
            &sample_items(),
            layout,
            AnimationConfig::default(),
            &capabilities,
        );

        // Viewport shows the first 50% of the first row only
        let viewport = Rect::new(0.0, 650.0, 800.0, 400.0);
        observer.update(&viewport, |id| grid.bounds_of(id));
        frames.run_frame(2000.0);

        let texts: Vec<String> = grid.render().into_iter().map(|view| view.text).collect();
        assert_eq!(texts, vec!["15+", "200+", "108+", "90%", "0"]);

        // Scroll to the second row
        let viewport = Rect::new(0.0, 800.0, 800.0, 400.0);
        observer.update(&viewport, |id| grid.bounds_of(id));
        frames.run_frame(4000.0);
        assert!(grid.all_finished());
    }
}
