/// Which optional directions words may be written in. Words can always go forward (left to
/// right) and down.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionFlags {
    /// Allows words to be written right to left.
    pub backwards: bool,
    /// Allows words to be written bottom to top.
    pub upwards: bool,
    /// Allows words to be written diagonally.
    pub diagonal: bool,
}

impl DirectionFlags {
    pub fn new(backwards: bool, upwards: bool, diagonal: bool) -> DirectionFlags {
        DirectionFlags {
            backwards,
            upwards,
            diagonal,
        }
    }

    /// Enables every direction.
    pub fn all() -> DirectionFlags {
        DirectionFlags::new(true, true, true)
    }

    /// Returns `true` iff every flag set in `required` is also set in `self`.
    fn satisfies(&self, required: &DirectionFlags) -> bool {
        (!required.backwards || self.backwards)
            && (!required.upwards || self.upwards)
            && (!required.diagonal || self.diagonal)
    }
}

/// One of the eight directions a word can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Left to right.
    Horizontal,
    /// Right to left.
    HorizontalBack,
    /// Top to bottom.
    Vertical,
    /// Bottom to top.
    VerticalUp,
    /// Down and to the right.
    Diagonal,
    /// Up and to the right.
    DiagonalUp,
    /// Down and to the left.
    DiagonalBack,
    /// Up and to the left.
    DiagonalUpBack,
}

impl Orientation {
    pub const ALL: [Orientation; 8] = [
        Orientation::Horizontal,
        Orientation::HorizontalBack,
        Orientation::Vertical,
        Orientation::VerticalUp,
        Orientation::Diagonal,
        Orientation::DiagonalUp,
        Orientation::DiagonalBack,
        Orientation::DiagonalUpBack,
    ];

    /// The `(dx, dy)` step between consecutive letters. `y` grows downwards.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::HorizontalBack => (-1, 0),
            Orientation::Vertical => (0, 1),
            Orientation::VerticalUp => (0, -1),
            Orientation::Diagonal => (1, 1),
            Orientation::DiagonalUp => (1, -1),
            Orientation::DiagonalBack => (-1, 1),
            Orientation::DiagonalUpBack => (-1, -1),
        }
    }

    /// The flags that must all be enabled for this orientation to be used.
    pub fn requirements(self) -> DirectionFlags {
        match self {
            Orientation::Horizontal | Orientation::Vertical => DirectionFlags::default(),
            Orientation::HorizontalBack => DirectionFlags::new(true, false, false),
            Orientation::VerticalUp => DirectionFlags::new(false, true, false),
            Orientation::Diagonal => DirectionFlags::new(false, false, true),
            Orientation::DiagonalUp => DirectionFlags::new(false, true, true),
            Orientation::DiagonalBack => DirectionFlags::new(true, false, true),
            Orientation::DiagonalUpBack => DirectionFlags::all(),
        }
    }

    /// Returns `true` iff the given flags enable everything this orientation requires.
    pub fn is_allowed_by(self, flags: &DirectionFlags) -> bool {
        flags.satisfies(&self.requirements())
    }

    /// Returns the `(x, y)` coordinate of the letter at `index` for a word starting at
    /// `(x, y)`. The result may be out of bounds, or negative.
    pub fn offset(self, x: usize, y: usize, index: usize) -> (isize, isize) {
        let (dx, dy) = self.step();
        let index = index as isize;
        (x as isize + dx * index, y as isize + dy * index)
    }
}

/// Returns the orientations permitted by the given flags, in a fixed order.
///
/// Horizontal and vertical have no requirements, so the result is never empty.
pub fn select_orientations(flags: &DirectionFlags) -> Vec<Orientation> {
    Orientation::ALL
        .iter()
        .copied()
        .filter(|orientation| orientation.is_allowed_by(flags))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn select_orientations_no_flags() {
        assert_eq!(
            select_orientations(&DirectionFlags::default()),
            vec![Orientation::Horizontal, Orientation::Vertical]
        );
    }

    #[test]
    fn select_orientations_all_flags() {
        assert_eq!(
            select_orientations(&DirectionFlags::all()),
            Orientation::ALL.to_vec()
        );
    }

    #[test]
    fn select_orientations_diagonal_only() {
        assert_eq!(
            select_orientations(&DirectionFlags::new(false, false, true)),
            vec![
                Orientation::Horizontal,
                Orientation::Vertical,
                Orientation::Diagonal
            ]
        );
    }

    #[test]
    fn select_orientations_diagonal_back_requires_backwards() {
        let orientations = select_orientations(&DirectionFlags::new(true, false, true));

        assert!(orientations.contains(&Orientation::DiagonalBack));
        assert!(orientations.contains(&Orientation::HorizontalBack));
        assert!(!orientations.contains(&Orientation::DiagonalUp));
        assert!(!orientations.contains(&Orientation::DiagonalUpBack));
        assert!(!orientations.contains(&Orientation::VerticalUp));
    }

    #[test]
    fn select_orientations_backwards_without_diagonal() {
        assert_eq!(
            select_orientations(&DirectionFlags::new(true, true, false)),
            vec![
                Orientation::Horizontal,
                Orientation::HorizontalBack,
                Orientation::Vertical,
                Orientation::VerticalUp
            ]
        );
    }

    #[test]
    fn steps_are_unit_and_distinct() {
        let mut steps: Vec<(isize, isize)> =
            Orientation::ALL.iter().map(|o| o.step()).collect();
        steps.sort();
        steps.dedup();

        assert_eq!(steps.len(), 8);
        assert!(steps.iter().all(|(dx, dy)| dx.abs() <= 1
            && dy.abs() <= 1
            && (*dx, *dy) != (0, 0)));
    }

    #[test]
    fn offset_walks_the_step() {
        assert_eq!(Orientation::DiagonalUpBack.offset(3, 3, 2), (1, 1));
        assert_eq!(Orientation::HorizontalBack.offset(0, 4, 1), (-1, 4));
        assert_eq!(Orientation::Vertical.offset(2, 0, 4), (2, 4));
    }
}
