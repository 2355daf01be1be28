use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_raycaster::core::{EngineConfig, WorldMap};
use tui_raycaster::engine::Engine;
use tui_raycaster::types::{Intent, Intents, PlayerState};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn test_engine_step_does_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    // A large room keeps the turning circle clear of walls.
    let config = EngineConfig::default().with_start(PlayerState::new(16.0, 16.0, 0.0));
    let mut engine = Engine::new(config, WorldMap::bordered(32, 32)).unwrap();
    let turning = Intents::NONE
        .with(Intent::RotateRight)
        .with(Intent::MoveForward);

    // Warm-up.
    engine.step(0.016, turning);

    let allocs = with_alloc_counting(|| {
        for _ in 0..100 {
            engine.step(0.016, turning);
        }
    });

    assert_eq!(allocs, 0, "engine step allocated {allocs} times");
}
