//! Simulation tick
//!
//! One call advances the game by one step. Input is not a parameter: commands
//! are applied to the state between ticks via `GameState::apply`.

use super::state::{GameEvent, GameState};
use crate::clamp_circle;
use crate::consts::GROWTH_PER_COLLECTIBLE;

/// Advance the game state by one step
pub fn tick(state: &mut GameState) {
    // Nothing moves before the first click or after a game over
    if !state.started || state.over {
        return;
    }

    let bounds = state.bounds();

    // Integrate and keep the whole circle on the surface
    let player = &mut state.player;
    player.pos += player.vel;
    player.pos = clamp_circle(player.pos, player.radius, bounds);

    // Eat every touching collectible, in spawn order. The radius grows as we
    // go, so later collectibles are tested against the bigger player.
    let mut eaten_radii = Vec::new();
    state.collectibles.retain(|c| {
        if player.bounds().touches(&c.bounds()) {
            player.radius += GROWTH_PER_COLLECTIBLE;
            eaten_radii.push(player.radius);
            false
        } else {
            true
        }
    });
    for radius in eaten_radii {
        state.push_event(GameEvent::Consumed { radius });
    }

    // Any obstacle contact ends the session
    let player_box = state.player.bounds();
    if state.obstacles.iter().any(|o| o.bounds().touches(&player_box)) {
        state.over = true;
        let event = GameEvent::GameOver {
            radius: state.player.radius,
            ticks: state.time_ticks + 1,
        };
        state.push_event(event);
    }

    if state.roll_spawn() {
        let pos = state.spawn_collectible();
        state.push_event(GameEvent::CollectibleSpawned { pos });
    }

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::state::{Collectible, Command, Direction, Obstacle};
    use glam::Vec2;
    use proptest::prelude::*;

    /// A started session with no entities and no random spawns
    fn empty_session() -> GameState {
        let settings = Settings {
            spawn_chance: 0.0,
            ..Settings::default()
        };
        let mut state = GameState::new(12345, settings);
        state.started = true;
        state
    }

    fn obstacle_at(x: f32, y: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            size: 10.0,
            color: "yellow".to_string(),
        }
    }

    fn collectible_at(x: f32, y: f32) -> Collectible {
        Collectible {
            pos: Vec2::new(x, y),
            radius: 5.0,
        }
    }

    #[test]
    fn test_tick_idle_before_start() {
        let mut state = GameState::new(12345, Settings::default());
        state.apply(Command::Steer(Direction::Right));
        let before = state.clone();
        tick(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_move_right_three_ticks() {
        let mut state = empty_session();
        state.apply(Command::Steer(Direction::Right));
        for _ in 0..3 {
            tick(&mut state);
        }
        assert_eq!(state.player.pos, Vec2::new(215.0, 200.0));
        assert_eq!(state.player.radius, 10.0);
        assert!(!state.over);
        assert_eq!(state.time_ticks, 3);
    }

    #[test]
    fn test_clamped_at_wall() {
        let mut state = empty_session();
        state.player.pos = Vec2::new(12.0, 200.0);
        state.apply(Command::Steer(Direction::Left));
        tick(&mut state);
        assert_eq!(state.player.pos, Vec2::new(10.0, 200.0));
        tick(&mut state);
        assert_eq!(state.player.pos, Vec2::new(10.0, 200.0));
    }

    #[test]
    fn test_touching_obstacle_ends_game() {
        let mut state = empty_session();
        state.obstacles.push(obstacle_at(0.0, 0.0));
        // Player box spans x 10..30, sharing the obstacle's right edge
        state.player.pos = Vec2::new(20.0, 10.0);
        tick(&mut state);
        assert!(state.over);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::GameOver {
                radius: 10.0,
                ticks: 1
            }]
        );

        // Frozen until restart, even with velocity set
        state.apply(Command::Steer(Direction::Right));
        let frozen = state.clone();
        for _ in 0..10 {
            tick(&mut state);
            assert!(state.over);
        }
        assert_eq!(state, frozen);

        state.apply(Command::Restart);
        assert!(!state.over);
    }

    #[test]
    fn test_obstacle_reached_by_moving() {
        let mut state = empty_session();
        state.obstacles.push(obstacle_at(230.0, 195.0));
        state.apply(Command::Steer(Direction::Right));
        // Right edge: 210 -> 215 -> 220 -> 225 -> 230
        for _ in 0..3 {
            tick(&mut state);
            assert!(!state.over);
        }
        tick(&mut state);
        assert!(state.over);
        assert_eq!(state.player.pos, Vec2::new(220.0, 200.0));
    }

    #[test]
    fn test_eating_grows_by_one() {
        let mut state = empty_session();
        state.collectibles.push(collectible_at(50.0, 50.0));
        state.collectibles.push(collectible_at(212.0, 200.0));
        tick(&mut state);
        assert_eq!(state.player.radius, 11.0);
        assert_eq!(state.collectibles, vec![collectible_at(50.0, 50.0)]);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::Consumed { radius: 11.0 }]
        );
    }

    #[test]
    fn test_eats_every_overlapping_collectible() {
        let mut state = empty_session();
        // Three adjacent collectibles all touching the player at once
        state.collectibles.push(collectible_at(205.0, 200.0));
        state.collectibles.push(collectible_at(200.0, 205.0));
        state.collectibles.push(collectible_at(195.0, 195.0));
        state.collectibles.push(collectible_at(300.0, 300.0));
        tick(&mut state);
        assert_eq!(state.player.radius, 13.0);
        assert_eq!(state.collectibles, vec![collectible_at(300.0, 300.0)]);
    }

    #[test]
    fn test_growth_reaches_later_collectibles() {
        let mut state = empty_session();
        // Player box 190..210. The first touches; the second's box starts at
        // 211 and is only reached once the player has grown to 11 (189..211)
        state.collectibles.push(collectible_at(210.0, 200.0));
        state.collectibles.push(collectible_at(216.0, 200.0));
        tick(&mut state);
        assert_eq!(state.player.radius, 12.0);
        assert!(state.collectibles.is_empty());
    }

    #[test]
    fn test_eat_and_die_same_tick() {
        let mut state = empty_session();
        state.collectibles.push(collectible_at(200.0, 200.0));
        state.obstacles.push(obstacle_at(205.0, 205.0));
        tick(&mut state);
        assert_eq!(state.player.radius, 11.0);
        assert!(state.over);
    }

    #[test]
    fn test_spawn_chance_one_spawns_every_tick() {
        let mut state = empty_session();
        state.settings.spawn_chance = 1.0;
        state.player.pos = Vec2::new(395.0, 395.0);
        state.player.radius = 1.0;
        for _ in 0..5 {
            tick(&mut state);
        }
        // Anything spawned under the player would have been eaten next tick
        let eaten = (state.player.radius - 1.0) as usize;
        assert_eq!(state.collectibles.len() + eaten, 5);
    }

    #[test]
    fn test_spawn_rate_is_roughly_one_percent() {
        let mut state = empty_session();
        state.settings.spawn_chance = 0.01;
        state.player.radius = 0.5;
        state.player.pos = Vec2::new(399.5, 399.5);
        let mut spawned = 0;
        for _ in 0..20_000 {
            tick(&mut state);
            spawned += state
                .drain_events()
                .iter()
                .filter(|e| matches!(e, GameEvent::CollectibleSpawned { .. }))
                .count();
        }
        assert!((120..=280).contains(&spawned), "spawned {}", spawned);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, Settings::default());
        let mut state2 = GameState::new(99999, Settings::default());

        let inputs = [
            Command::Start,
            Command::Steer(Direction::Up),
            Command::Steer(Direction::Left),
            Command::Steer(Direction::Down),
        ];

        for input in inputs {
            state1.apply(input);
            state2.apply(input);
            for _ in 0..40 {
                tick(&mut state1);
                tick(&mut state2);
            }
        }

        assert_eq!(state1, state2);
    }

    proptest! {
        #[test]
        fn prop_idle_or_over_is_noop(
            seed in any::<u64>(),
            started in any::<bool>(),
            x in 0.0f32..400.0,
            y in 0.0f32..400.0,
            dir in 0usize..4,
        ) {
            let mut state = GameState::new(seed, Settings::default());
            if started {
                state.apply(Command::Start);
                state.over = true;
            }
            state.player.pos = Vec2::new(x, y);
            let dirs = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];
            state.apply(Command::Steer(dirs[dir]));

            let before = state.clone();
            tick(&mut state);
            prop_assert_eq!(state, before);
        }

        #[test]
        fn prop_player_stays_on_surface(
            width in 100.0f32..800.0,
            height in 100.0f32..800.0,
            radius in 1.0f32..45.0,
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
        ) {
            let mut state = empty_session();
            state.settings.width = width;
            state.settings.height = height;
            state.player.radius = radius;
            state.player.pos = Vec2::new(x, y);
            state.player.vel = Vec2::new(vx, vy);

            tick(&mut state);

            let p = state.player.pos;
            prop_assert!(p.x >= radius && p.x <= width - radius);
            prop_assert!(p.y >= radius && p.y <= height - radius);
        }

        #[test]
        fn prop_radius_never_shrinks(
            seed in any::<u64>(),
            steps in proptest::collection::vec((0usize..4, 1usize..30), 1..20),
        ) {
            let settings = Settings {
                spawn_chance: 0.2,
                initial_collectibles: 40,
                ..Settings::default()
            };
            let mut state = GameState::new(seed, settings);
            state.apply(Command::Start);
            let dirs = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

            let mut last_radius = state.player.radius;
            for (dir, ticks) in steps {
                state.apply(Command::Steer(dirs[dir]));
                for _ in 0..ticks {
                    let count_before = state.collectibles.len();
                    tick(&mut state);
                    prop_assert!(state.player.radius >= last_radius);
                    let eaten = (state.player.radius - last_radius) as usize;
                    // Each bite removes exactly one collectible; a spawn may add one
                    let spawned = state.collectibles.len() + eaten - count_before;
                    prop_assert!(spawned <= 1);
                    last_radius = state.player.radius;
                }
            }
        }
    }
}
