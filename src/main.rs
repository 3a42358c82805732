use anyhow::Result;
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use samurai_arena::engine::game_loop::{FrameClock, TARGET_FRAME_TIME};
use samurai_arena::engine::input::{Action, InputManager};
use samurai_arena::engine::physics::PhysicsWorld;
use samurai_arena::game::arena::{Arena, TEST_LEVEL_CONFIG};
use samurai_arena::game::characters::{Character, ControllerConfig};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Samurai Arena...");

    let mut physics = PhysicsWorld::with_gravity(TEST_LEVEL_CONFIG.gravity);
    physics.set_timestep(TARGET_FRAME_TIME);
    let arena = Arena::test_level(&mut physics)?;

    let mut player = Character::new("Samurai", ControllerConfig::default())?;
    let spawn = arena.spawn_point();
    player.spawn(&mut physics, spawn.x, spawn.y);

    let mut input = InputManager::new();
    let mut clock = FrameClock::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(arena.title())
        .with_inner_size(winit::dpi::LogicalSize::new(
            arena.config().width,
            arena.config().height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::MouseInput { state, button, .. },
                ..
            } => {
                input.process_mouse_event(button, state);
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.just_pressed(Action::Menu) {
                    info!("Menu pressed, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.just_pressed(Action::Pause) {
                    clock.toggle_pause();
                }

                if let Some(dt) = clock.begin_frame() {
                    let snapshot = input.snapshot();
                    player.update(Some(&snapshot), &mut physics, dt);

                    physics.set_timestep(dt);
                    physics.step();

                    if let Some(position) = player.position(&physics) {
                        if arena.is_out_of_bounds(position) {
                            info!("{} fell out of the arena, respawning", player.name);
                            player.spawn(&mut physics, spawn.x, spawn.y);
                        }
                    }
                }

                if clock.frame_count() % 300 == 0 {
                    debug!(
                        "{:.1} fps, state {:?}, weapon {:?}, blade on body: {}, blade contacts: {}",
                        clock.fps(),
                        player.state(),
                        player.weapon_state(),
                        player.blade_touching_body(),
                        player.blade_contacts().len()
                    );
                }

                input.update();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
