use crate::chess::Board;
use rayon::prelude::*;

impl Board {
    /// Counts the leaf nodes of the legal move tree `depth` plies deep.
    ///
    /// See [perft](https://www.chessprogramming.org/Perft).
    pub fn perft(&self, depth: u8) -> usize {
        match depth {
            0 => 1,
            1 => self.moves().len(),
            d => self
                .moves()
                .into_par_iter()
                .map(|m| {
                    let mut next = *self;
                    match next.make(m) {
                        Ok(_) => next.perft(d - 1),
                        Err(_) => 0,
                    }
                })
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn perft_of_depth_zero_is_one(b: Board) {
        assert_eq!(b.perft(0), 1);
    }

    #[proptest]
    fn perft_of_depth_one_counts_legal_moves(b: Board) {
        assert_eq!(b.perft(1), b.moves().len());
    }

    #[test]
    fn perft_of_the_starting_position() {
        let b = Board::default();
        assert_eq!(b.perft(2), 400);
        assert_eq!(b.perft(3), 8902);
    }
}
