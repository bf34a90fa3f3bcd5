use crate::camera::Camera;
use crate::canvas::Canvas;
use crate::manager::*;
use crate::world::{World, DEFAULT_DEPTH};
use crate::*;

use log::*;
use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub nthread: usize,
    pub depth: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            nthread: num_cpus::get(),
            depth: DEFAULT_DEPTH,
        }
    }
}

type RowResult = (usize, Result<Vec<RGB>>);

pub struct Renderer;

impl Renderer {
    /// Renders every pixel of `camera` on `config.nthread` workers. The world is shared read-only.
    pub fn render<C: Camera + Clone + Send + 'static>(
        &self,
        world: Arc<World>,
        camera: &C,
        config: RenderConfig,
    ) -> Result<Canvas> {
        use std::thread;
        let (w, h) = (camera.hsize(), camera.vsize());
        let nthread = config.nthread.max(1);
        info!("rendering {}x{} on {} threads, depth {}", w, h, nthread, config.depth);

        let manager = Arc::new(Mutex::new(Manager::new(h)));
        let (tx, rx) = mpsc::channel::<RowResult>();
        let mut threads = vec![];
        for i in 0..nthread {
            let world = world.clone();
            let camera = camera.clone();
            let manager = manager.clone();
            let tx = tx.clone();
            let thread = thread::spawn(move || {
                Self::render_thread(&world, camera, config.depth, i, manager, tx)
            });
            threads.push(thread);
        }
        drop(tx);

        let mut canvas = Canvas::new(w, h);
        let mut first_error = None;
        for (row, result) in rx {
            match result {
                Ok(colors) => canvas.set_row(row, &colors),
                Err(e) => {
                    error!("row {} failed: {}", row, e);
                    manager.lock().unwrap().halt();
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        for thread in threads {
            if let Err(panic) = thread.join() {
                std::panic::resume_unwind(panic);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(canvas),
        }
    }

    fn render_thread<C: Camera>(
        world: &World,
        camera: C,
        depth: usize,
        thread_id: usize,
        manager: Arc<Mutex<Manager>>,
        tx: Sender<RowResult>,
    ) {
        let mut rows = 0;
        loop {
            let task = match manager.lock().unwrap().next(thread_id) {
                Some(task) => task,
                None => break,
            };
            let result = Self::render_row(world, &camera, depth, task.row);
            rows += 1;
            if tx.send((task.row, result)).is_err() {
                //receiver is gone, nothing left to report to
                break;
            }
        }
        debug!("thread {} finished after {} rows", thread_id, rows);
    }

    fn render_row<C: Camera>(world: &World, camera: &C, depth: usize, y: usize) -> Result<Vec<RGB>> {
        let mut row = Vec::with_capacity(camera.hsize());
        for x in 0..camera.hsize() {
            let ray = camera.ray_for_pixel(x, y);
            let color = world.color_at(&ray, depth)?;
            if !color.is_finite() {
                warn!("color at ({}, {}) is not finite", x, y);
            }
            row.push(color);
        }
        Ok(row)
    }
}
