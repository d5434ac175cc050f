use rust_decimal::Decimal;
use crate::server::model::menu_item::MenuItem;
use crate::server::model::order::OrderLine;
use crate::server::model::validation::Quantity;
use crate::server::util::money::format_amount;

/// The order currently being taken: its lines in insertion order and their running total.
///
/// `running_total` always equals the sum of the lines' totals; both only change
/// through [`OrderAccumulator::add_line`] and [`OrderAccumulator::clear`].
#[derive(Debug, Default)]
pub(crate) struct OrderAccumulator {
    lines: Vec<OrderLine>,
    running_total: Decimal,
}

impl OrderAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line for `quantity` portions of `item`. Repeated items get their own line.
    pub fn add_line(&mut self, item: &MenuItem, quantity: Quantity) -> &OrderLine {
        let line = OrderLine::new(item, quantity);
        self.running_total += line.line_total();
        self.lines.push(line);
        &self.lines[self.lines.len() - 1]
    }

    pub fn current_lines(&self) -> std::slice::Iter<'_, OrderLine> {
        self.lines.iter()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn running_total(&self) -> Decimal {
        self.running_total
    }

    pub fn display_total(&self) -> String {
        format_amount(self.running_total)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.running_total = Decimal::ZERO;
    }
}
