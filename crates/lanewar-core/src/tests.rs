#[cfg(test)]
mod tests {
    use crate::config::{MatchConfig, UnitArchetype};
    use crate::enums::{MovePhase, Outcome, Side};
    use crate::events::MatchEvent;
    use crate::state::MatchSnapshot;
    use crate::types::{Position, SimTime};

    #[test]
    fn test_default_config_matches_reference_rules() {
        let config = MatchConfig::default();

        assert_eq!(config.catalog.len(), 6);
        assert_eq!(
            config.catalog[0],
            UnitArchetype {
                cost: 15,
                max_health: 15,
                attack: 15
            }
        );
        assert_eq!(
            config.catalog[5],
            UnitArchetype {
                cost: 120,
                max_health: 120,
                attack: 100
            }
        );

        // Catalog costs are non-decreasing — cheapest unit first.
        for pair in config.catalog.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
        }

        assert_eq!(config.tower_health, 300);
        assert_eq!(config.starting_gold, 100);
        assert_eq!(config.attack_delay_ms, 1200);
        assert_eq!(config.pause_duration_ms, 500);
    }

    #[test]
    fn test_tower_geometry() {
        let config = MatchConfig::default();

        assert!((config.player_tower_x() - 50.0).abs() < 1e-10);
        assert!((config.enemy_tower_x() - 750.0).abs() < 1e-10);
        assert!((config.player_tower_edge() - 75.0).abs() < 1e-10);
        assert!((config.enemy_tower_edge() - 725.0).abs() < 1e-10);
        assert!((config.lane_y() - 300.0).abs() < 1e-10);

        // Stop boundaries leave room between the towers.
        let player_stop = config.enemy_tower_edge() - config.stop_distance;
        let enemy_stop = config.player_tower_edge() + config.stop_distance;
        assert!(enemy_stop < player_stop);
    }

    #[test]
    fn test_side_direction_and_opponent() {
        assert!(Side::Player.advance_sign() > 0.0);
        assert!(Side::Enemy.advance_sign() < 0.0);
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        time.advance(16);
        time.advance(33);
        assert_eq!(time.tick, 2);
        assert_eq!(time.now_ms, 33);
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(100.0, 300.0);
        let b = Position::new(130.0, 300.0);
        assert!((a.distance_x(&b) - 30.0).abs() < 1e-10);
        assert!((b.distance_x(&a) - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_event_serde_uses_type_tag() {
        let event = MatchEvent::UnitSpawned {
            unit_id: 7,
            side: Side::Enemy,
            archetype: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"UnitSpawned\""));

        let back: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_empty_snapshot_serializes() {
        let snapshot = MatchSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.outcome, Outcome::InProgress);
        assert_eq!(back.units.len(), 0);
        assert_eq!(back.player_tower.health, 0);
        assert_eq!(back.units, snapshot.units);
    }

    #[test]
    fn test_move_phase_default_is_paused() {
        assert_eq!(MovePhase::default(), MovePhase::Paused);
    }
}
