use crate::ImageId;

/// Single-image viewer over the gallery's current list.
///
/// While open, `images[index] == image` holds for the list the lightbox was
/// last driven with. Every transition is total and reports whether the state
/// changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open { image: ImageId, index: usize },
}

impl Lightbox {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn selected_image(&self) -> Option<&ImageId> {
        match self {
            Self::Open { image, .. } => Some(image),
            Self::Closed => None,
        }
    }

    pub fn selected_index(&self) -> Option<usize> {
        match self {
            Self::Open { index, .. } => Some(*index),
            Self::Closed => None,
        }
    }

    /// Opens at the first position of `image`. A miss leaves the state as is.
    pub fn open(&mut self, image: &ImageId, images: &[ImageId]) -> bool {
        let Some(index) = images.iter().position(|candidate| candidate == image) else {
            return false;
        };
        *self = Self::Open {
            image: image.clone(),
            index,
        };
        true
    }

    pub fn next(&mut self, images: &[ImageId]) -> bool {
        self.step(images, |current, len| (current + 1) % len)
    }

    pub fn previous(&mut self, images: &[ImageId]) -> bool {
        self.step(images, |current, len| (current + len - 1) % len)
    }

    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = Self::Closed;
        was_open
    }

    fn step(&mut self, images: &[ImageId], advance: impl Fn(usize, usize) -> usize) -> bool {
        let Self::Open { index, .. } = self else {
            return false;
        };
        let len = images.len();
        if len == 0 {
            return false;
        }
        let target = advance(*index % len, len);
        *self = Self::Open {
            image: images[target].clone(),
            index: target,
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(count: usize) -> Vec<ImageId> {
        (0..count)
            .map(|index| ImageId::new(format!("https://img/nature/{index}.jpeg")).expect("id"))
            .collect()
    }

    fn opened_at(images: &[ImageId], index: usize) -> Lightbox {
        let mut lightbox = Lightbox::Closed;
        assert!(lightbox.open(&images[index], images));
        lightbox
    }

    #[test]
    fn nature_walkthrough_wraps_around() {
        let nature = ids(6);
        let mut lightbox = opened_at(&nature, 2);
        assert_eq!(lightbox.selected_index(), Some(2));

        lightbox.next(&nature);
        assert_eq!(lightbox.selected_index(), Some(3));

        let mut visited = Vec::new();
        for _ in 0..5 {
            lightbox.next(&nature);
            visited.push(lightbox.selected_index().expect("open"));
        }
        assert_eq!(visited, vec![4, 5, 0, 1, 2]);
        assert_eq!(lightbox.selected_image(), Some(&nature[2]));
    }

    #[test]
    fn next_then_previous_round_trips() {
        for len in 1..=7 {
            let images = ids(len);
            for start in 0..len {
                let mut lightbox = opened_at(&images, start);
                lightbox.next(&images);
                lightbox.previous(&images);
                assert_eq!(lightbox.selected_index(), Some(start));

                lightbox.previous(&images);
                lightbox.next(&images);
                assert_eq!(lightbox.selected_index(), Some(start));
            }
        }
    }

    #[test]
    fn stepping_length_times_returns_to_start() {
        let images = ids(5);
        for start in 0..images.len() {
            let mut lightbox = opened_at(&images, start);
            for _ in 0..images.len() {
                lightbox.next(&images);
            }
            assert_eq!(lightbox, opened_at(&images, start));
            for _ in 0..images.len() {
                lightbox.previous(&images);
            }
            assert_eq!(lightbox.selected_index(), Some(start));
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let images = ids(4);
        let mut lightbox = opened_at(&images, 0);
        lightbox.previous(&images);
        assert_eq!(lightbox.selected_index(), Some(3));
        assert_eq!(lightbox.selected_image(), Some(&images[3]));
    }

    #[test]
    fn opening_missing_image_is_a_no_op() {
        let images = ids(3);
        let stranger = ImageId::new("https://img/elsewhere.jpeg").expect("id");

        let mut closed = Lightbox::Closed;
        assert!(!closed.open(&stranger, &images));
        assert_eq!(closed, Lightbox::Closed);

        let mut open = opened_at(&images, 1);
        assert!(!open.open(&stranger, &images));
        assert_eq!(open.selected_index(), Some(1));
    }

    #[test]
    fn duplicates_open_at_first_occurrence() {
        let mut images = ids(3);
        images.push(images[1].clone());
        let mut lightbox = Lightbox::Closed;
        lightbox.open(&images[3], &images);
        assert_eq!(lightbox.selected_index(), Some(1));
    }

    #[test]
    fn navigation_is_a_no_op_when_closed_or_empty() {
        let mut closed = Lightbox::Closed;
        assert!(!closed.next(&ids(3)));
        assert!(!closed.previous(&ids(3)));
        assert_eq!(closed, Lightbox::Closed);

        let images = ids(2);
        let mut open = opened_at(&images, 1);
        assert!(!open.next(&[]));
        assert!(!open.previous(&[]));
        assert_eq!(open.selected_index(), Some(1));
    }

    #[test]
    fn close_clears_selection() {
        let images = ids(2);
        let mut lightbox = opened_at(&images, 0);
        assert!(lightbox.close());
        assert_eq!(lightbox.selected_image(), None);
        assert_eq!(lightbox.selected_index(), None);
        assert!(!lightbox.close());
    }
}
