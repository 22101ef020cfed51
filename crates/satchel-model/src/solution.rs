// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::index::ItemIndex;

/// A packing: the items chosen and what they add up to.
///
/// `selected` holds builder indices (`ItemIndex`) in ascending order, so the
/// solution reads the same regardless of how the solver reordered items
/// internally.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// The total value of the selected items.
    objective_value: f64,

    /// The total weight of the selected items.
    total_weight: f64,

    /// The selected items, ascending.
    selected: Vec<ItemIndex>,
}

impl Solution {
    /// Constructs a new `Solution`. The selection is sorted.
    pub fn new(objective_value: f64, total_weight: f64, mut selected: Vec<ItemIndex>) -> Self {
        selected.sort_unstable();
        debug_assert!(
            selected.windows(2).all(|w| w[0] != w[1]),
            "called `Solution::new` with duplicate items in the selection"
        );

        Self {
            objective_value,
            total_weight,
            selected,
        }
    }

    /// The solution that packs nothing.
    #[inline]
    pub fn empty() -> Self {
        Self {
            objective_value: 0.0,
            total_weight: 0.0,
            selected: Vec::new(),
        }
    }

    /// Returns the total value of this solution.
    #[inline]
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Returns the total weight of this solution.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Returns the selected items in ascending order.
    #[inline]
    pub fn selected(&self) -> &[ItemIndex] {
        &self.selected
    }

    /// Returns the number of selected items.
    #[inline]
    pub fn num_selected(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if the item is part of this solution.
    #[inline]
    pub fn contains(&self, index: ItemIndex) -> bool {
        self.selected.binary_search(&index).is_ok()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution Summary")?;
        writeln!(f, "   Objective Value: {}", self.objective_value)?;
        writeln!(f, "   Total Weight:    {}", self.total_weight)?;

        if self.selected.is_empty() {
            writeln!(f, "   (No items selected)")?;
            return Ok(());
        }

        let ids: Vec<String> = self.selected.iter().map(|i| i.get().to_string()).collect();
        writeln!(f, "   Selected Items:  {}", ids.join(", "))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ii(i: usize) -> ItemIndex {
        ItemIndex::new(i)
    }

    #[test]
    fn test_new_sorts_selection_and_accessors() {
        let sol = Solution::new(220.0, 50.0, vec![ii(2), ii(1)]);

        assert_eq!(sol.objective_value(), 220.0);
        assert_eq!(sol.total_weight(), 50.0);
        assert_eq!(sol.selected(), &[ii(1), ii(2)]);
        assert_eq!(sol.num_selected(), 2);
        assert!(sol.contains(ii(1)));
        assert!(!sol.contains(ii(0)));
    }

    #[test]
    fn test_empty_solution() {
        let sol = Solution::empty();
        assert_eq!(sol.objective_value(), 0.0);
        assert_eq!(sol.total_weight(), 0.0);
        assert!(sol.selected().is_empty());
        assert_eq!(sol, Solution::new(0.0, 0.0, Vec::new()));
    }

    #[test]
    fn test_display_formatting() {
        let sol = Solution::new(180.0, 40.0, vec![ii(2), ii(0)]);

        let mut expected = String::new();
        expected.push_str("Solution Summary\n");
        expected.push_str("   Objective Value: 180\n");
        expected.push_str("   Total Weight:    40\n");
        expected.push_str("   Selected Items:  0, 2\n");

        assert_eq!(format!("{}", sol), expected);
    }

    #[test]
    fn test_display_empty() {
        let displayed = format!("{}", Solution::empty());
        assert!(displayed.contains("(No items selected)"));
    }
}
