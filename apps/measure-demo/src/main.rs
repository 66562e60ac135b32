use std::cell::Cell;
use std::rc::Rc;

use wraplist_foundation::prelude::*;
use wraplist_foundation::{InvalidationUnsupported, ItemUnavailable};

const GLYPH_WIDTH: i32 = 8;
const LINE_HEIGHT: i32 = 24;
const DIVIDER: i32 = 1;

/// Rows of monospace text separated by one-pixel dividers.
struct TextRows {
    rows: Vec<String>,
    /// Number of leading rows being animated out; they cannot be bound.
    removing: usize,
}

struct Row {
    index: usize,
    measured: IntSize,
    divider: Option<EdgeInsets>,
}

impl ItemProvider for TextRows {
    type Item = Row;

    fn item_count(&self) -> usize {
        self.rows.len()
    }

    fn item_for_position(&mut self, index: usize) -> Result<Row, ItemUnavailable> {
        if index < self.removing || index >= self.rows.len() {
            return Err(ItemUnavailable { index });
        }
        Ok(Row {
            index,
            measured: IntSize::ZERO,
            divider: None,
        })
    }

    fn measure(&mut self, row: &mut Row, width: MeasureSpec, height: MeasureSpec) {
        let text = &self.rows[row.index];
        let natural_width = text.chars().count() as i32 * GLYPH_WIDTH;
        let lines = match width.mode {
            MeasureMode::Unspecified => 1,
            _ if width.size <= 0 => 1,
            _ => (natural_width + width.size - 1) / width.size.max(1),
        };
        row.measured = IntSize::new(
            width.resolve(natural_width),
            height.resolve(lines.max(1) * LINE_HEIGHT),
        );
    }

    fn measured_size(&self, row: &Row) -> IntSize {
        row.measured
    }

    fn layout_params(&self, _row: &Row) -> ItemLayoutParams {
        ItemLayoutParams::new(RequestedSize::Fill, RequestedSize::Wrap)
            .with_margins(EdgeInsets::symmetric(4, 2))
    }

    fn invalidate_decoration_insets(
        &mut self,
        row: &mut Row,
    ) -> Result<(), InvalidationUnsupported> {
        row.divider = None;
        Ok(())
    }

    fn decoration_insets(&mut self, row: &mut Row) -> EdgeInsets {
        let has_next = row.index + 1 < self.rows.len();
        *row.divider.get_or_insert_with(|| {
            if has_next {
                EdgeInsets::from_components(0, 0, 0, DIVIDER)
            } else {
                EdgeInsets::ZERO
            }
        })
    }

    fn recycle(&mut self, row: Row) {
        log::trace!("recycled row {}", row.index);
    }
}

#[derive(Default)]
struct ConsoleHost {
    layout_requests: Cell<usize>,
}

impl LayoutHost for ConsoleHost {
    fn request_layout(&self) {
        self.layout_requests.set(self.layout_requests.get() + 1);
        log::info!("layout requested");
    }

    fn set_measured_dimension(&self, size: IntSize) {
        println!("  list measured at {} x {}", size.width, size.height);
    }

    fn over_scroll_mode(&self) -> OverScrollMode {
        OverScrollMode::Always
    }

    fn set_over_scroll_mode(&self, mode: OverScrollMode) {
        log::info!("over-scroll mode set to {mode:?}");
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut rows = TextRows {
        rows: vec![
            "wraplist sizes itself to the first row".to_string(),
            "second row".to_string(),
            "third row".to_string(),
        ],
        removing: 0,
    };
    let host = Rc::new(ConsoleHost::default());
    let config = WrapContentConfig::default().with_padding(EdgeInsets::uniform(8));
    let mut manager = match WrapContentLayoutManager::new(config) {
        Ok(manager) => manager,
        Err(err) => {
            log::error!("cannot create layout manager: {err}");
            return;
        }
    };
    manager.attach(host.clone());

    println!("=== wraplist measurement demo ===");
    for width in [480, 200, 120] {
        println!("container width {width}:");
        manager.on_measure(&mut rows, MeasureSpec::exactly(width), MeasureSpec::unspecified());
    }

    println!("first row being removed:");
    rows.removing = 1;
    manager.on_measure(&mut rows, MeasureSpec::exactly(120), MeasureSpec::unspecified());
    rows.removing = 0;

    println!("switching to horizontal:");
    manager.set_orientation(Axis::Horizontal);
    manager.on_measure(&mut rows, MeasureSpec::unspecified(), MeasureSpec::exactly(64));

    if let Err(err) = manager.set_over_scroll_mode(3) {
        log::warn!("{err}");
    }
    if let Err(err) = manager.set_child_size(48) {
        log::warn!("{err}");
    }
    println!("layout requests: {}", host.layout_requests.get());
}
