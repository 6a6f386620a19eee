//! Snake plugin - handles snake movement, input, growth, and self-collision.

use std::collections::VecDeque;

use bevy::{input::InputSystems, prelude::*};

use crate::game::{
    Direction, FoodEaten, GameRng, Grid, InputSnapshot, Simulation, SnakeDied, cell_of,
    snap_to_grid_lines,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .add_systems(
                PreUpdate,
                (capture_input, steer_snake).chain().after(InputSystems),
            )
            .add_systems(FixedUpdate, advance_simulation);
    }
}

/// The snake: a continuous head followed by a FIFO of grid cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Position in grid units; its floor is the occupied cell.
    pub head: Vec2,
    pub direction: Direction,
    /// Oldest segment at the front, newest at the back.
    pub tail: VecDeque<IVec2>,
    pub growing: bool,
    pub alive: bool,
    /// Cells travelled per tick.
    pub velocity: f32,
}

/// What a single [`Snake::advance`] did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Step {
    /// The head crossed into a new cell and the body advanced.
    pub crossed_cell: bool,
    /// The tail lengthened by one segment.
    pub grew: bool,
    /// The head ran into the tail.
    pub died: bool,
}

impl Snake {
    /// Spawns a tail-less snake on the grid's centre cell, heading up.
    pub fn spawn(grid: &Grid, velocity: f32) -> Self {
        Snake {
            head: grid.center().as_vec2(),
            direction: Direction::Up,
            tail: VecDeque::new(),
            growing: false,
            alive: true,
            velocity,
        }
    }

    pub fn head_cell(&self) -> IVec2 {
        cell_of(self.head)
    }

    /// Length including the head.
    pub fn length(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn occupies(&self, cell: IVec2) -> bool {
        self.head_cell() == cell || self.tail.contains(&cell)
    }

    /// Moves the head by one tick's worth of travel.
    ///
    /// The body only steps when the head's cell changes: the vacated cell is
    /// pushed onto the tail and, unless the snake is growing, the oldest
    /// segment is dropped.
    pub fn advance(&mut self, grid: &Grid) -> Step {
        let before = self.head_cell();
        let moved = snap_to_grid_lines(self.head + self.direction.delta() * self.velocity);
        self.head = grid.wrap(moved);
        let after = self.head_cell();

        if after == before {
            return Step::default();
        }

        let mut step = Step {
            crossed_cell: true,
            ..default()
        };

        self.tail.push_back(before);
        if self.growing {
            self.growing = false;
            step.grew = true;
        } else {
            self.tail.pop_front();
        }

        if self.tail.contains(&after) {
            self.alive = false;
            step.died = true;
        }

        step
    }
}

/// System to translate held keys into this frame's input snapshot.
fn capture_input(keyboard_input: Res<ButtonInput<KeyCode>>, mut snapshot: ResMut<InputSnapshot>) {
    let next = InputSnapshot::from_keys(&keyboard_input);
    if next != *snapshot {
        trace!(?next, "input changed");
        *snapshot = next;
    }
}

/// System to apply the input snapshot to the snake's direction before any tick runs.
fn steer_snake(snapshot: Res<InputSnapshot>, mut simulation: ResMut<Simulation>) {
    let before = simulation.snake.direction;
    simulation.steer(&snapshot);
    if simulation.snake.direction != before {
        debug!(from = ?before, to = ?simulation.snake.direction, "snake turned");
    }
}

/// System to run one fixed-timestep tick.
fn advance_simulation(
    mut simulation: ResMut<Simulation>,
    mut rng: ResMut<GameRng>,
    mut food_eaten_writer: MessageWriter<FoodEaten>,
    mut died_writer: MessageWriter<SnakeDied>,
) {
    let report = simulation.tick(&mut rng.0);

    if let Some(cell) = report.ate {
        food_eaten_writer.write(FoodEaten { cell });
    }
    if report.step.died {
        died_writer.write(SnakeDied {
            score: simulation.score,
            length: simulation.snake.length(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::Food;
    use bevy::ecs::system::RunSystemOnce;

    fn grid() -> Grid {
        Grid::new(40, 30)
    }

    #[test]
    fn spawns_centered_heading_up_with_no_tail() {
        let snake = Snake::spawn(&grid(), 0.1);
        assert_eq!(snake.head, Vec2::new(20.0, 15.0));
        assert_eq!(snake.direction, Direction::Up);
        assert!(snake.tail.is_empty());
        assert!(snake.alive);
        assert!(!snake.growing);
    }

    #[test]
    fn head_advances_by_velocity_and_wraps() {
        let grid = grid();
        let mut snake = Snake::spawn(&grid, 0.25);
        snake.direction = Direction::Left;

        // 20 cells to the left edge, then 10 more from the right edge
        for _ in 0..120 {
            snake.advance(&grid);
        }

        assert_eq!(snake.head, Vec2::new(30.0, 15.0));
    }

    #[test]
    fn tenth_cell_steps_cross_exactly_once_per_cell() {
        let grid = grid();
        let mut snake = Snake::spawn(&grid, 0.1);

        let mut crossings = 0;
        for tick in 1..=300 {
            if snake.advance(&grid).crossed_cell {
                crossings += 1;
            }
            if tick % 10 == 0 {
                assert_eq!(crossings, tick / 10, "crossings after {tick} ticks");
            }
        }

        // 30 cells up on a 30-row grid wraps back to the start
        assert_eq!(snake.head, Vec2::new(20.0, 15.0));
        assert_eq!(snake.head_cell(), IVec2::new(20, 15));
    }

    #[test]
    fn body_only_steps_on_cell_boundary_crossings() {
        let grid = grid();
        let mut snake = Snake::spawn(&grid, 0.25);
        snake.direction = Direction::Right;
        snake.tail = VecDeque::from([IVec2::new(18, 15), IVec2::new(19, 15)]);

        let steps: Vec<Step> = (0..4).map(|_| snake.advance(&grid)).collect();

        assert_eq!(
            steps.iter().filter(|step| step.crossed_cell).count(),
            1,
            "exactly one crossing in four quarter-cell ticks"
        );
        assert!(steps[3].crossed_cell);
        assert_eq!(
            snake.tail,
            VecDeque::from([IVec2::new(19, 15), IVec2::new(20, 15)])
        );
        assert_eq!(snake.head_cell(), IVec2::new(21, 15));
    }

    #[test]
    fn moving_up_crosses_immediately_because_floor_drops() {
        let grid = grid();
        let mut snake = Snake::spawn(&grid, 0.25);

        let step = snake.advance(&grid);

        assert!(step.crossed_cell);
        assert_eq!(snake.head_cell(), IVec2::new(20, 14));
        assert!(snake.tail.is_empty(), "tail-less snake stays tail-less");
    }

    #[test]
    fn growing_lengthens_tail_by_one_on_next_crossing() {
        let grid = grid();
        let mut snake = Snake::spawn(&grid, 0.5);
        snake.direction = Direction::Right;
        snake.growing = true;

        let first = snake.advance(&grid);
        assert!(!first.crossed_cell);
        assert!(snake.growing, "growth waits for a crossing");
        assert!(snake.tail.is_empty());

        let second = snake.advance(&grid);
        assert!(second.grew);
        assert!(!snake.growing);
        assert_eq!(snake.tail, VecDeque::from([IVec2::new(20, 15)]));

        snake.advance(&grid);
        snake.advance(&grid);
        assert_eq!(snake.tail.len(), 1, "length holds once growth is applied");
        assert_eq!(snake.tail, VecDeque::from([IVec2::new(21, 15)]));
    }

    #[test]
    fn running_into_tail_kills_the_snake() {
        let grid = grid();
        let mut snake = Snake::spawn(&grid, 1.0);
        snake.direction = Direction::Left;
        // A ring the head closes back into
        snake.tail = VecDeque::from([
            IVec2::new(20, 14),
            IVec2::new(19, 14),
            IVec2::new(19, 15),
            IVec2::new(19, 16),
            IVec2::new(20, 16),
            IVec2::new(21, 16),
            IVec2::new(21, 15),
        ]);

        let step = snake.advance(&grid);
        assert!(step.died);
        assert!(!snake.alive);
    }

    #[test]
    fn following_own_tail_end_is_not_a_collision() {
        let grid = grid();
        let mut snake = Snake::spawn(&grid, 1.0);
        snake.direction = Direction::Left;
        // The oldest segment leaves the cell the head enters
        snake.tail = VecDeque::from([
            IVec2::new(19, 15),
            IVec2::new(19, 16),
            IVec2::new(20, 16),
        ]);

        let step = snake.advance(&grid);

        assert!(!step.died);
        assert!(snake.alive);
    }

    #[test]
    fn steering_system_applies_snapshot_with_reverse_lockout() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);

        let mut simulation = Simulation::new(grid(), 0.1, 0.02, Food::at(IVec2::ZERO));
        simulation.snake.direction = Direction::Left;
        app.insert_resource(simulation);
        app.insert_resource(InputSnapshot {
            right: true,
            ..default()
        });

        app.world_mut().run_system_once(steer_snake).unwrap();
        assert_eq!(
            app.world().resource::<Simulation>().snake.direction,
            Direction::Left
        );

        app.insert_resource(InputSnapshot {
            down: true,
            ..default()
        });
        app.world_mut().run_system_once(steer_snake).unwrap();
        assert_eq!(
            app.world().resource::<Simulation>().snake.direction,
            Direction::Down
        );
    }

    #[test]
    fn tick_system_leaves_a_dead_snake_in_place() {
        use rand::{SeedableRng, rngs::StdRng};

        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_message::<FoodEaten>().add_message::<SnakeDied>();
        app.insert_resource(GameRng(StdRng::seed_from_u64(8)));

        let mut simulation = Simulation::new(grid(), 0.5, 0.02, Food::at(IVec2::new(20, 15)));
        simulation.snake.alive = false;
        let frozen = simulation.snake.clone();
        app.insert_resource(simulation);

        for _ in 0..5 {
            app.world_mut().run_system_once(advance_simulation).unwrap();
        }

        let simulation = app.world().resource::<Simulation>();
        assert_eq!(simulation.snake, frozen);
        assert_eq!(simulation.food, Food::at(IVec2::new(20, 15)));
        assert!(app.world().resource::<Messages<FoodEaten>>().is_empty());
    }

    #[test]
    fn capture_input_reads_held_movement_keys() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<InputSnapshot>();

        let mut keys = ButtonInput::<KeyCode>::default();
        keys.press(KeyCode::KeyA);
        keys.press(KeyCode::ArrowDown);
        app.insert_resource(keys);

        app.world_mut().run_system_once(capture_input).unwrap();

        assert_eq!(
            *app.world().resource::<InputSnapshot>(),
            InputSnapshot {
                down: true,
                left: true,
                ..default()
            }
        );
    }
}
