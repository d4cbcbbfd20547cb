use rand::Rng;

/// Tiles per board side
pub const GRID_SIZE: usize = 5;
/// Tiles per board
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// How missing required letters are written onto a freshly drawn board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Placement {
    /// Overwrite a uniformly random cell per missing letter. A later
    /// overwrite may land on an earlier placement.
    #[default]
    Overwrite,
    /// Only overwrite cells that hold an unrequired letter or a duplicate,
    /// so every required letter survives.
    Reserved,
}

impl Placement {
    pub fn name(&self) -> &'static str {
        match self {
            Placement::Overwrite => "overwrite",
            Placement::Reserved => "reserved",
        }
    }

    pub fn all() -> [Placement; 2] {
        [Placement::Overwrite, Placement::Reserved]
    }
}

/// Board is the 5x5 letter grid the player picks from.
/// Cells are fixed once generated; a new target gets a new board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Draw an unconstrained board, uniformly with replacement from `pool`
    pub fn random(pool: &[char], rng: &mut impl Rng) -> Self {
        Self::from_letters(draw_letters(pool, rng))
    }

    /// Draw a board and make sure `required` letters show up in it
    pub fn for_target(
        required: &[char],
        pool: &[char],
        rng: &mut impl Rng,
        placement: Placement,
    ) -> Self {
        let letters = draw_letters(pool, rng);
        let letters = match placement {
            Placement::Overwrite => ensure_components(letters, required, rng),
            Placement::Reserved => ensure_components_reserved(letters, required, rng),
        };
        Self::from_letters(letters)
    }

    /// Build a board from rows, e.g. for a fixed layout
    pub const fn from_rows(cells: [[char; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Reshape a flat row-major sequence into rows
    fn from_letters(letters: [char; CELL_COUNT]) -> Self {
        let mut cells = [[' '; GRID_SIZE]; GRID_SIZE];
        for (i, letter) in letters.into_iter().enumerate() {
            cells[i / GRID_SIZE][i % GRID_SIZE] = letter;
        }
        Self { cells }
    }

    /// Get board dimensions as (columns, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (GRID_SIZE, GRID_SIZE)
    }

    /// Get letter at column `x`, row `y`
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        (x < GRID_SIZE && y < GRID_SIZE).then(|| self.cells[y][x])
    }

    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn contains(&self, letter: char) -> bool {
        self.cells.iter().flatten().any(|&c| c == letter)
    }

    pub fn contains_all(&self, letters: &[char]) -> bool {
        letters.iter().all(|&l| self.contains(l))
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, &c)| (x, y, c)))
    }
}

fn draw_letters(pool: &[char], rng: &mut impl Rng) -> [char; CELL_COUNT] {
    debug_assert!(!pool.is_empty());
    std::array::from_fn(|_| pool[rng.random_range(0..pool.len())])
}

/// Overwrite one random cell for each required letter missing from `letters`.
/// Presence is checked against the letters as they stand after earlier
/// overwrites, so collisions between placements are possible.
pub fn ensure_components(
    mut letters: [char; CELL_COUNT],
    required: &[char],
    rng: &mut impl Rng,
) -> [char; CELL_COUNT] {
    for &part in required {
        if !letters.contains(&part) {
            let idx = rng.random_range(0..CELL_COUNT);
            letters[idx] = part;
        }
    }
    letters
}

/// Like [`ensure_components`], but never overwrites the last copy of a
/// required letter.
pub fn ensure_components_reserved(
    mut letters: [char; CELL_COUNT],
    required: &[char],
    rng: &mut impl Rng,
) -> [char; CELL_COUNT] {
    for &part in required {
        if letters.contains(&part) {
            continue;
        }
        let free: Vec<usize> = (0..CELL_COUNT)
            .filter(|&i| {
                let letter = letters[i];
                !required.contains(&letter) || letters.iter().filter(|&&c| c == letter).count() > 1
            })
            .collect();
        // At most three distinct required letters over 25 cells, so some
        // cell is always free.
        if let Some(&idx) = free.get(rng.random_range(0..free.len().max(1))) {
            letters[idx] = part;
        }
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::jamo::{decompose, POOL};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_board_is_five_by_five_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let board = Board::random(&POOL, &mut rng);
            assert_eq!(board.dimensions(), (5, 5));
            assert_eq!(board.iter_cells().count(), 25);
            assert!(board.iter_cells().all(|(_, _, c)| POOL.contains(&c)));
        }
    }

    #[test]
    fn test_single_requirement_always_present() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let board = Board::for_target(&['ㄲ'], &POOL, &mut rng, Placement::Overwrite);
            assert!(board.contains('ㄲ'));
        }
    }

    #[test]
    fn test_missing_requirement_is_placed() {
        // A pool without ㄲ can never draw it, so only the guarantee step puts it there
        let pool = ['ㄱ', 'ㅏ'];
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::for_target(&['ㄲ'], &pool, &mut rng, Placement::Overwrite);
        assert_eq!(board.iter_cells().filter(|&(_, _, c)| c == 'ㄲ').count(), 1);
        assert!(board.iter_cells().all(|(_, _, c)| pool.contains(&c) || c == 'ㄲ'));
    }

    #[test]
    fn test_trailing_only_letter_is_placed() {
        // ㄳ is never in the pool
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let parts = decompose('삯');
            let board = Board::for_target(&parts, &POOL, &mut rng, Placement::Reserved);
            assert!(board.contains('ㄳ'));
        }
    }

    #[test]
    fn test_reserved_placement_keeps_every_requirement() {
        let mut rng = StdRng::seed_from_u64(2024);
        for word in ['산', '달', '꽃', '빛', '닭', '없', '가'] {
            let parts = decompose(word);
            for _ in 0..500 {
                let board = Board::for_target(&parts, &POOL, &mut rng, Placement::Reserved);
                assert!(board.contains_all(&parts), "{word}: {board:?}");
            }
        }
    }

    #[test]
    fn test_reserved_placement_with_crowded_board() {
        let mut rng = StdRng::seed_from_u64(5);
        let letters = ['ㄱ'; CELL_COUNT];
        let placed = ensure_components_reserved(letters, &['ㄱ', 'ㅏ', 'ㄹ'], &mut rng);
        assert!(placed.contains(&'ㄱ'));
        assert!(placed.contains(&'ㅏ'));
        assert!(placed.contains(&'ㄹ'));
    }

    #[test]
    fn test_overwrite_presence_is_overwhelmingly_likely() {
        let mut rng = StdRng::seed_from_u64(99);
        let parts = decompose('닭');
        let runs = 2000;
        let misses = (0..runs)
            .filter(|_| {
                let board = Board::for_target(&parts, &POOL, &mut rng, Placement::Overwrite);
                !board.contains_all(&parts)
            })
            .count();
        // ㄺ is never drawn, so its placement lands on the only ㄷ or ㅏ now and then
        assert!(misses > 0, "overwrite placement never dropped a letter");
        assert!(misses * 5 < runs, "misses: {misses}");
    }

    #[test]
    fn test_overwrite_can_clobber_only_copy() {
        let mut letters = ['ㅏ'; CELL_COUNT];
        letters[12] = 'ㄷ';
        let clobbered = (0..500).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let placed = ensure_components(letters, &['ㄷ', 'ㄺ'], &mut rng);
            assert!(placed.contains(&'ㄺ'));
            !placed.contains(&'ㄷ')
        });
        assert!(clobbered);
    }

    #[test]
    fn test_reserved_never_clobbers_only_copy() {
        let mut letters = ['ㅏ'; CELL_COUNT];
        letters[12] = 'ㄷ';
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placed = ensure_components_reserved(letters, &['ㄷ', 'ㄺ'], &mut rng);
            assert_eq!(placed[12], 'ㄷ');
            assert!(placed.contains(&'ㄺ'));
        }
    }

    #[test]
    fn test_overwrite_leaves_present_letters_alone() {
        let mut rng = StdRng::seed_from_u64(1);
        let letters: [char; CELL_COUNT] = std::array::from_fn(|i| POOL[i]);
        let placed = ensure_components(letters, &['ㄱ', 'ㅏ'], &mut rng);
        assert_eq!(placed, letters);
    }

    #[test]
    fn test_same_seed_same_board() {
        let parts = decompose('별');
        let deal = || {
            let mut rng = StdRng::seed_from_u64(8);
            Board::for_target(&parts, &POOL, &mut rng, Placement::Overwrite)
        };
        let (a, b) = (deal(), deal());
        assert_eq!(a, b);
    }

    #[test]
    fn test_get_is_row_major() {
        let board = Board::from_rows([
            ['ㄱ', 'ㄴ', 'ㄷ', 'ㄹ', 'ㅁ'],
            ['ㅂ', 'ㅅ', 'ㅇ', 'ㅈ', 'ㅊ'],
            ['ㅋ', 'ㅌ', 'ㅍ', 'ㅎ', 'ㅏ'],
            ['ㅑ', 'ㅓ', 'ㅕ', 'ㅗ', 'ㅛ'],
            ['ㅜ', 'ㅠ', 'ㅡ', 'ㅣ', 'ㅐ'],
        ]);
        assert_eq!(board.get(0, 0), Some('ㄱ'));
        assert_eq!(board.get(4, 0), Some('ㅁ'));
        assert_eq!(board.get(0, 1), Some('ㅂ'));
        assert_eq!(board.get(3, 4), Some('ㅣ'));
        assert_eq!(board.get(5, 0), None);
        assert_eq!(board.get(0, 5), None);
    }
}
