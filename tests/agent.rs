mod common;
use common::*;

#[cfg(test)]
mod agent
{
    use pacmind::prelude::*;

    use super::*;
    use crate::common::tree::*;

    fn args(mode: Mode, depth: u32) -> SearchArgs
    {
        SearchArgs {
            mode,
            evaluator: "value".into(),
            depth: Depth::new(depth),
            seed: Some(11),
        }
    }

    #[test]
    fn every_mode_chooses()
    {
        let _setup = setup::setup();
        let position = tree::textbook();
        let registry = registry();

        for mode in [Mode::Minimax, Mode::AlphaBeta, Mode::Expectimax]
        {
            let mut agent = SearchAgent::new(args(mode, 1), &registry).unwrap();
            assert_eq!(agent.choose_action(&position).unwrap(), 0, "{}", mode);
            assert!(agent.statistics().leaves > 0);
        }

        // Every immediate successor of the textbook root looks the same to a reflex agent.
        let mut agent = SearchAgent::new(args(Mode::Reflex, 1), &registry).unwrap();
        assert!(agent.choose_action(&position).unwrap() < 3);
        assert_eq!(agent.statistics().leaves, 3);
    }

    #[test]
    fn decide_reports_the_backed_up_value()
    {
        let _setup = setup::setup();
        let mut agent = SearchAgent::new(args(Mode::AlphaBeta, 1), &registry()).unwrap();
        assert_eq!(agent.decide(&tree::textbook()).unwrap(), Decision { action: 0, score: 3.0 });
        assert_eq!(agent.args().mode, Mode::AlphaBeta);
    }

    #[test]
    fn unknown_evaluator()
    {
        let _setup = setup::setup();
        let mut bad = args(Mode::Minimax, 2);
        bad.evaluator = "scoreEvaluationFunction".into();

        let err = SearchAgent::new(bad, &registry()).err().unwrap();
        assert_eq!(err.kind, Kind::UnknownEvaluator);
    }

    #[test]
    fn invalid_depth()
    {
        let _setup = setup::setup();
        for depth in [0, 65]
        {
            let err = SearchAgent::new(args(Mode::Minimax, depth), &registry()).err().unwrap();
            assert_eq!(err.kind, Kind::InvalidDepth);
        }
    }

    #[test]
    fn non_finite_evaluator()
    {
        let _setup = setup::setup();
        let mut registry = registry();
        registry.register("broken", |_| f64::NAN);

        let mut bad = args(Mode::Expectimax, 2);
        bad.evaluator = "broken".into();

        let mut agent = SearchAgent::new(bad, &registry).unwrap();
        assert_eq!(agent.choose_action(&tree::textbook()).unwrap_err().kind, Kind::InvalidScore);
    }

    #[test]
    fn registry_names()
    {
        let _setup = setup::setup();
        assert_eq!(Registry::<Maze>::standard().names(), vec!["better", "reflex", "score"]);

        let mut registry = registry();
        registry.register("value", |p| -p.value());
        assert_eq!(registry.names(), vec!["value"]);
        assert_eq!(registry.resolve("value").unwrap()(&tree::textbook()), -0.0);
        assert_eq!(registry.resolve("nope").unwrap_err().kind, Kind::UnknownEvaluator);
    }

    #[test]
    fn parse_args()
    {
        let _setup = setup::setup();
        let parsed = SearchArgs::parse("depth=3, evaluator=better,mode=expectimax,seed=7").unwrap();
        assert_eq!(
            parsed,
            SearchArgs {
                mode:      Mode::Expectimax,
                evaluator: "better".into(),
                depth:     Depth::new(3),
                seed:      Some(7),
            }
        );

        assert_eq!(SearchArgs::parse("").unwrap(), SearchArgs::default());
        assert_eq!(SearchArgs::default().depth, Depth::new(2));
        assert_eq!(SearchArgs::parse("mode=alphabeta").unwrap().mode, Mode::AlphaBeta);
    }

    #[test]
    fn parse_args_errors()
    {
        let _setup = setup::setup();
        let cases = [
            ("depth=0", Kind::InvalidDepth),
            ("depth=two", Kind::InvalidDepth),
            ("depth=-1", Kind::InvalidDepth),
            ("mode=greedy", Kind::ParseError),
            ("seed=x", Kind::ParseError),
            ("depth", Kind::ParseError),
            ("evalFn=better", Kind::InvalidOption),
        ];

        for (args, kind) in cases
        {
            assert_eq!(SearchArgs::parse(args).unwrap_err().kind, kind, "{}", args);
        }
    }

    #[test]
    fn modes()
    {
        let _setup = setup::setup();
        for mode in [Mode::Reflex, Mode::Minimax, Mode::AlphaBeta, Mode::Expectimax]
        {
            assert_eq!(mode.to_string().parse::<Mode>().unwrap(), mode);
        }
        assert_eq!(Mode::default(), Mode::Minimax);
    }
}
