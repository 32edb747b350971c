use std::path::Path;

use crate::prelude::*;

/// The small classic maze, with two adversaries.
pub const SMALL_CLASSIC: &str = "\
%%%%%%%%%%%%%%%%%%%%
%......%G  G%......%
%.%%...%%  %%...%%.%
%.%o.%........%.o%.%
%.%%.%.%%%%%%.%.%%.%
%........P.........%
%%%%%%%%%%%%%%%%%%%%";

#[derive(Clone, Debug, PartialEq, Eq)]
/// A parsed maze layout: the static walls plus where everything starts.
pub struct Layout
{
    pub width:    usize,
    pub height:   usize,
    /// Row-major wall flags.
    pub walls:    Vec<bool>,
    pub food:     Vec<Cell>,
    pub capsules: Vec<Cell>,
    pub hero:     Cell,
    pub ghosts:   Vec<Cell>,
}

impl Default for Layout
{
    fn default() -> Self
    {
        // The built-in layout is known to be well-formed.
        SMALL_CLASSIC.parse().unwrap()
    }
}

impl FromStr for Layout
{
    type Err = Error;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err>
    {
        let base = Error::new(Kind::ParseError, "Invalid maze layout.".into());
        let rows: Vec<&str> = s.lines().map(|line| line.trim_end_matches('\r')).filter(|line| !line.is_empty()).collect();

        let Some(first) = rows.first()
        else
        {
            return Err(Error::new(Kind::ParseError, "Layout has no rows.".into()).chain(base));
        };

        let width = first.chars().count();
        let height = rows.len();
        let mut walls = Vec::with_capacity(width * height);
        let (mut food, mut capsules, mut ghosts, mut heroes) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());

        for (y, row) in rows.iter().enumerate()
        {
            let row_width = row.chars().count();
            if row_width != width
            {
                return Err(Error::mismatch(&format!("width of row {}", y), width, row_width).chain(base));
            }

            for (x, ch) in row.chars().enumerate()
            {
                let cell = Cell::new(x as i32, y as i32);
                walls.push(ch == '%');
                match ch
                {
                    | '%' | ' ' =>
                    {}
                    | '.' => food.push(cell),
                    | 'o' => capsules.push(cell),
                    | 'P' => heroes.push(cell),
                    | 'G' => ghosts.push(cell),
                    | _ =>
                    {
                        let err = Error::new(Kind::ParseError, format!("Unknown layout symbol '{}' at {}.", ch, cell));
                        return Err(err.chain(base));
                    }
                }
            }
        }

        let &[hero] = heroes.as_slice()
        else
        {
            return Err(Error::mismatch("number of heroes", 1, heroes.len()).chain(base));
        };

        Ok(Layout {
            width,
            height,
            walls,
            food,
            capsules,
            hero,
            ghosts,
        })
    }
}

impl Layout
{
    /// Reads a layout from a file.
    pub fn load(path: &Path) -> Result<Layout>
    {
        let text = std::fs::read_to_string(path)?;
        text.parse::<Layout>()
            .map_err(|e| e.chain(Error::new(Kind::ParseError, format!("Could not load '{}'.", path.display()))))
    }

    /// Whether a cell is a wall; anything off the grid counts as one.
    pub fn is_wall(&self, cell: Cell) -> bool
    {
        self.index(cell).map_or(true, |i| self.walls[i])
    }

    /// The row-major index of a cell, if it is on the grid.
    pub fn index(&self, cell: Cell) -> Option<usize>
    {
        let on_grid = (0..self.width as i32).contains(&cell.x) && (0..self.height as i32).contains(&cell.y);
        on_grid.then(|| cell.y as usize * self.width + cell.x as usize)
    }
}
