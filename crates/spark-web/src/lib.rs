pub mod runner;

pub use runner::EngineRunner;

// Lets `export_engine!` name engine types without the caller importing them.
pub use spark_engine;

/// Generate all `#[wasm_bindgen]` exports for a particle demo.
///
/// Generates:
/// - `thread_local!` storage for the EngineRunner
/// - `with_runner()` helper function
/// - wasm-bindgen exports (engine_init, engine_tick, input handlers, buffer accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
/// use spark_engine::*;
///
/// fn config() -> EngineConfig { EngineConfig::default() }
///
/// spark_web::export_engine!(config, "my-demo");
/// ```
///
/// # Arguments
///
/// - `$config_fn`: a `fn() -> EngineConfig` giving the demo's defaults, used
///   when the host passes an empty config string
/// - `$name`: a string literal used in the initialization log message
#[macro_export]
macro_rules! export_engine {
    ($config_fn:path, $name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::EngineRunner>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::EngineRunner) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Engine not initialized. Call engine_init() first.");
                f(runner)
            })
        }

        /// Create the engine. `config_json` may be empty to use the demo defaults.
        #[wasm_bindgen]
        pub fn engine_init(config_json: &str) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let runner = if config_json.trim().is_empty() {
                $crate::EngineRunner::new($config_fn())
            } else {
                $crate::EngineRunner::from_json(config_json)
            };

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            log::info!("{}: initialized", $name);
        }

        #[wasm_bindgen]
        pub fn engine_tick(dt: f32) -> u32 {
            with_runner(|r| r.tick(dt))
        }

        /// Move the spawn point. Coordinates are y-up world units, so hosts
        /// with y-down pointer events pass `height - y`.
        #[wasm_bindgen]
        pub fn engine_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::spark_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn engine_key_down(key_code: u32) {
            with_runner(|r| r.push_input($crate::spark_engine::InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn engine_key_up(key_code: u32) {
            with_runner(|r| r.push_input($crate::spark_engine::InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn engine_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count())
        }

        #[wasm_bindgen]
        pub fn get_viewport_width() -> f32 {
            with_runner(|r| r.viewport_width())
        }

        #[wasm_bindgen]
        pub fn get_viewport_height() -> f32 {
            with_runner(|r| r.viewport_height())
        }

        #[wasm_bindgen]
        pub fn get_particle_size() -> u32 {
            with_runner(|r| r.particle_size())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
