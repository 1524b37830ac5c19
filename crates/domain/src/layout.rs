use crate::ImageId;

pub const COLUMN_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Left,
    Center,
    Right,
}

impl Column {
    pub const ORDER: [Column; COLUMN_COUNT] = [Column::Left, Column::Center, Column::Right];

    pub fn for_index(index: usize) -> Self {
        match index % COLUMN_COUNT {
            0 => Self::Left,
            1 => Self::Center,
            _ => Self::Right,
        }
    }

    pub fn offset(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Center => 1,
            Self::Right => 2,
        }
    }
}

/// Three-way split of a flat list by index modulo three. Only `partition`
/// builds one, so the columns always differ in length by at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout<T = ImageId> {
    left: Vec<T>,
    center: Vec<T>,
    right: Vec<T>,
}

impl<T> Default for ColumnLayout<T> {
    fn default() -> Self {
        Self {
            left: Vec::new(),
            center: Vec::new(),
            right: Vec::new(),
        }
    }
}

impl<T: Clone> ColumnLayout<T> {
    pub fn partition(items: &[T]) -> Self {
        let mut layout = Self::default();
        for (index, item) in items.iter().enumerate() {
            layout.column_mut(Column::for_index(index)).push(item.clone());
        }
        layout
    }

    /// Round-robin merge of the three columns; the inverse of `partition`.
    pub fn interleave(&self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len());
        for row in 0..self.left.len() {
            for column in Column::ORDER {
                if let Some(item) = self.column(column).get(row) {
                    items.push(item.clone());
                }
            }
        }
        items
    }
}

impl<T> ColumnLayout<T> {
    pub fn column(&self, column: Column) -> &[T] {
        match column {
            Column::Left => &self.left,
            Column::Center => &self.center,
            Column::Right => &self.right,
        }
    }

    /// Items of one column paired with their position in the flat list.
    pub fn positions(&self, column: Column) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.column(column)
            .iter()
            .enumerate()
            .map(move |(row, item)| (row * COLUMN_COUNT + column.offset(), item))
    }

    pub fn len(&self) -> usize {
        self.left.len() + self.center.len() + self.right.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    fn column_mut(&mut self, column: Column) -> &mut Vec<T> {
        match column {
            Column::Left => &mut self.left,
            Column::Center => &mut self.center,
            Column::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_items_by_index_modulo_three() {
        let layout = ColumnLayout::partition(&[0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(layout.column(Column::Left), &[0, 3, 6]);
        assert_eq!(layout.column(Column::Center), &[1, 4]);
        assert_eq!(layout.column(Column::Right), &[2, 5]);
    }

    #[test]
    fn interleave_reconstructs_any_length() {
        for length in 0..=20 {
            let items: Vec<usize> = (0..length).collect();
            let layout = ColumnLayout::partition(&items);
            assert_eq!(layout.interleave(), items, "length {length}");
            assert_eq!(layout.len(), length);
        }
    }

    #[test]
    fn column_lengths_differ_by_at_most_one() {
        for length in 0..=20 {
            let items: Vec<usize> = (0..length).collect();
            let layout = ColumnLayout::partition(&items);
            let [left, center, right] = Column::ORDER.map(|column| layout.column(column).len());
            assert!((0..=1).contains(&(left - right)), "length {length}");
            assert!((0..=1).contains(&(center - right)), "length {length}");
            assert!(left >= center);
        }
    }

    #[test]
    fn positions_map_back_to_flat_indices() {
        let items: Vec<char> = "abcdefgh".chars().collect();
        let layout = ColumnLayout::partition(&items);
        for column in Column::ORDER {
            for (index, item) in layout.positions(column) {
                assert_eq!(items[index], *item);
                assert_eq!(Column::for_index(index), column);
            }
        }
    }

    #[test]
    fn partition_is_stable_under_recomputation() {
        let items = vec!["x", "y", "z", "x"];
        assert_eq!(ColumnLayout::partition(&items), ColumnLayout::partition(&items));
    }

    #[test]
    fn empty_list_yields_empty_columns() {
        let layout = ColumnLayout::<u8>::partition(&[]);
        assert!(layout.is_empty());
        assert!(layout.interleave().is_empty());
        assert_eq!(layout, ColumnLayout::default());
    }
}
