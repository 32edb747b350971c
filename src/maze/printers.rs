use super::*;

impl std::fmt::Display for Maze
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let layout = self.layout();
        for y in 0..layout.height as i32
        {
            let row: String = (0..layout.width as i32).map(|x| self.symbol(Cell::new(x, y))).collect();
            writeln!(f, "{}", row)?;
        }
        write!(f, "Score: {} ({}, turn {})", self.points(), self.outcome(), self.turn())
    }
}

impl Maze
{
    /// The character drawn for a cell; the hero is drawn over anything, then ghosts, then items.
    fn symbol(&self, cell: Cell) -> char
    {
        if self.hero() == cell
        {
            return 'P';
        }

        if let Some(ghost) = self.ghosts().iter().find(|g| g.cell == cell)
        {
            return if ghost.scared > 0 { 'g' } else { 'G' };
        }

        if self.layout().is_wall(cell)
        {
            '%'
        }
        else if self.power_ups().contains(&cell)
        {
            'o'
        }
        else if self.has_food(cell)
        {
            '.'
        }
        else
        {
            ' '
        }
    }
}
