mod common;
use common::*;

#[cfg(test)]
mod maze
{
    use pacmind::prelude::*;

    use super::*;

    /// A corridor where the ghost is two steps away from the hero.
    const CORRIDOR: &str = "%%%%%%\n%P G.%\n%%%%%%";

    /// One step from clearing the maze.
    const LAST_BITE: &str = "%%%%\n%P.%\n%%%%";

    /// A capsule right next to the hero, with a ghost walking towards it.
    const CAPSULE: &str = "%%%%%%%\n%Po .G%\n%%%%%%%";

    fn corridor() -> Maze
    {
        CORRIDOR.parse().unwrap()
    }

    #[test]
    fn small_classic()
    {
        let _setup = setup::setup();
        let maze = Maze::default();

        assert_eq!(maze.num_agents(), 3);
        assert_eq!(maze.hero(), Cell::new(9, 5));
        assert_eq!(maze.food().len(), SMALL_CLASSIC.matches('.').count());
        assert_eq!(maze.power_ups().len(), 2);
        assert_eq!(maze.outcome(), Outcome::InProgress);
        assert_eq!(maze.legal_actions(MAXIMIZER), vec![Direction::East, Direction::West, Direction::Stop]);
        assert_eq!(maze.legal_actions(1), vec![Direction::East]);
        assert!(maze.legal_actions(3).is_empty());
    }

    #[test]
    fn hero_moves()
    {
        let _setup = setup::setup();
        let maze = Maze::default();
        let food = maze.food().len();

        let fed = maze.successor(MAXIMIZER, Direction::East).unwrap();
        assert_eq!(fed.points(), consts::FOOD_REWARD - consts::TIME_PENALTY);
        assert_eq!(fed.food().len(), food - 1);
        assert_eq!(fed.turn(), 1);

        let idle = maze.successor(MAXIMIZER, Direction::Stop).unwrap();
        assert_eq!(idle.points(), -consts::TIME_PENALTY);
        assert_eq!(idle.hero(), maze.hero());

        // Successors never touch their source.
        assert_eq!(maze.points(), 0);
        assert_eq!(maze, Maze::default());
    }

    #[test]
    fn illegal_actions()
    {
        let _setup = setup::setup();
        let maze = Maze::default();
        assert_eq!(maze.successor(MAXIMIZER, Direction::North).unwrap_err().kind, Kind::IllegalAction);
        assert_eq!(maze.successor(1, Direction::Stop).unwrap_err().kind, Kind::IllegalAction);
        assert_eq!(maze.successor(7, Direction::East).unwrap_err().kind, Kind::IllegalAction);
    }

    #[test]
    fn caught_by_a_ghost()
    {
        let _setup = setup::setup();
        let maze = corridor().successor(MAXIMIZER, Direction::East).unwrap();
        assert_eq!(maze.legal_actions(1), vec![Direction::East, Direction::West]);

        let caught = maze.successor(1, Direction::West).unwrap();
        assert!(caught.is_lose());
        assert!(!caught.is_win());
        assert_eq!(caught.points(), -consts::TIME_PENALTY - consts::LOSE_PENALTY);
        assert!((0..caught.num_agents()).all(|agent| caught.legal_actions(agent).is_empty()));
    }

    #[test]
    fn clearing_the_maze()
    {
        let _setup = setup::setup();
        let maze: Maze = LAST_BITE.parse().unwrap();
        assert_eq!(maze.num_agents(), 1);

        let cleared = maze.successor(MAXIMIZER, Direction::East).unwrap();
        assert!(cleared.is_win());
        assert_eq!(cleared.points(), consts::FOOD_REWARD + consts::WIN_REWARD - consts::TIME_PENALTY);
        assert!(cleared.legal_actions(MAXIMIZER).is_empty());
    }

    #[test]
    fn capsules_scare_ghosts()
    {
        let _setup = setup::setup();
        let mut maze: Maze = CAPSULE.parse().unwrap();

        maze = maze.successor(MAXIMIZER, Direction::East).unwrap();
        assert!(maze.power_ups().is_empty());
        assert_eq!(maze.adversaries()[0].scared, consts::SCARED_TIME);

        maze = maze.successor(1, Direction::West).unwrap();
        assert_eq!(maze.adversaries()[0].scared, consts::SCARED_TIME - 1);

        // Heading west, the ghost may not turn back east.
        maze = maze.successor(MAXIMIZER, Direction::East).unwrap();
        assert_eq!(maze.legal_actions(1), vec![Direction::West]);

        maze = maze.successor(1, Direction::West).unwrap();
        assert_eq!(maze.points(), consts::GHOST_REWARD - 2 * consts::TIME_PENALTY);
        assert_eq!(maze.ghosts()[0].cell, maze.ghosts()[0].start);
        assert!(maze.adversaries()[0].dangerous());
        assert!(maze.has_food(Cell::new(4, 1)));
        assert_eq!(maze.outcome(), Outcome::InProgress);
    }

    #[test]
    fn evaluators()
    {
        let _setup = setup::setup();
        let maze = corridor();
        let expected = 100.0 / 2.0 + 10.0 / 3.0 + 2.0;
        assert!((evaluators::better(&maze) - expected).abs() < 1e-9);
        assert_eq!(evaluators::score(&maze), 0.0);

        let cornered = maze.successor(MAXIMIZER, Direction::East).unwrap();
        assert_eq!(evaluators::score(&cornered), -1.0);
        assert_eq!(evaluators::better(&cornered), -1001.0);
        assert_eq!(evaluators::reflex(&cornered), -101.0);

        let caught = cornered.successor(1, Direction::West).unwrap();
        assert_eq!(evaluators::better(&caught), -1501.0);
    }

    #[test]
    fn searchers_avoid_the_ghost()
    {
        let _setup = setup::setup();
        let registry = Registry::<Maze>::standard();

        for mode in [Mode::Minimax, Mode::AlphaBeta, Mode::Expectimax]
        {
            let args = SearchArgs {
                mode,
                depth: Depth::ROUND,
                ..Default::default()
            };
            let mut agent = SearchAgent::new(args, &registry).unwrap();
            let decision = agent.decide(&corridor()).unwrap();
            assert_eq!(decision, Decision { action: Direction::Stop, score: -1.0 }, "{}", mode);
        }
    }

    #[test]
    fn layout_errors()
    {
        let _setup = setup::setup();
        let cases = [
            ("%%%\n%P\n%%%", Kind::MismatchError),
            ("%%%\n% %\n%%%", Kind::MismatchError),
            ("%%%%\n%PP%\n%%%%", Kind::MismatchError),
            ("%%%\n%P#\n%%%", Kind::ParseError),
            ("", Kind::ParseError),
        ];

        for (layout, kind) in cases
        {
            assert_eq!(layout.parse::<Layout>().unwrap_err().kind, kind, "{:?}", layout);
        }

        let missing = Layout::load(std::path::Path::new("no/such/layout.lay"));
        assert_eq!(missing.unwrap_err().kind, Kind::IoError);
    }

    #[test]
    fn display()
    {
        let _setup = setup::setup();
        let drawn = corridor().to_string();
        assert!(drawn.starts_with("%%%%%%\n%P G.%\n%%%%%%\n"));
        assert!(drawn.contains("Score: 0"));
        assert_eq!("%%%\n%P%\n%%%".parse::<Maze>().unwrap().outcome(), Outcome::Won);
    }
}
