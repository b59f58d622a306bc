use rayon::prelude::*;

use crate::{
    animation::{ease::Ease, transition::Transition},
    config::MorphConfig,
    driver::scheduler::{MorphDriver, TickOutcome},
    foundation::error::{QrMorphError, QrMorphResult},
    grid::{encode::QrEncoder, pixel_grid::PixelGrid},
    layout::{offset::offset_layout, position::position_layout},
    render::{frame::FrameRGBA, raster::Panel},
    zones::{indexer::ZoneIndexer, mapper::IdentityMapper},
};

/// Both layout transitions for one tick.
///
/// The offset panel (top) keys elements by `(zone, rank)` slot; the position panel
/// (bottom) keys each black module by its identity.
#[derive(Clone, Debug)]
pub struct TickTransitions {
    /// Offset-layout transition.
    pub offset: Transition,
    /// Position-layout transition.
    pub position: Transition,
    /// Module count per side of the incoming grid.
    pub grid_size: usize,
}

impl TickTransitions {
    /// Diff the layouts of `from` and `to`.
    pub fn between(
        from: &PixelGrid,
        to: &PixelGrid,
        mapper: &IdentityMapper,
    ) -> QrMorphResult<Self> {
        let indexer = mapper.indexer();
        Ok(Self {
            offset: Transition::between(&offset_layout(from, mapper), &offset_layout(to, mapper)),
            position: Transition::between(
                &position_layout(from, indexer)?,
                &position_layout(to, indexer)?,
            ),
            grid_size: to.size(),
        })
    }

    /// Hold `grid` still.
    pub fn still(grid: &PixelGrid, mapper: &IdentityMapper) -> QrMorphResult<Self> {
        Self::between(grid, grid, mapper)
    }

    /// Render both panels at `progress`, offset panel on top.
    pub fn render(
        &self,
        progress: f64,
        ease: Ease,
        canvas_width: u32,
    ) -> QrMorphResult<FrameRGBA> {
        let width = canvas_width;
        let height = canvas_width.checked_mul(2).ok_or_else(|| {
            QrMorphError::render(format!("canvas width {width} is too large for two panels"))
        })?;
        let mut data = vec![0u8; width as usize * height as usize * 4];

        let mut top = Panel::new(width);
        top.draw(&self.offset.sample(progress, ease), self.grid_size);
        top.blit(&mut data, width, 0);

        let mut bottom = Panel::new(width);
        bottom.draw(&self.position.sample(progress, ease), self.grid_size);
        bottom.blit(&mut data, width, width);

        Ok(FrameRGBA {
            width,
            height,
            data,
        })
    }
}

/// Counters reported by [`render_sequence`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Ticks attempted.
    pub ticks_total: u64,
    /// Ticks whose payload could not be encoded.
    pub ticks_skipped: u64,
    /// Frames produced, including the initial still.
    pub frames_rendered: u64,
}

/// Mapper for the zone size configured in `config`.
pub fn mapper_for(config: &MorphConfig) -> QrMorphResult<IdentityMapper> {
    Ok(IdentityMapper::new(ZoneIndexer::new(config.zone_size)?))
}

/// A single frame showing `grid` at rest.
pub fn render_still(grid: &PixelGrid, config: &MorphConfig) -> QrMorphResult<FrameRGBA> {
    let mapper = mapper_for(config)?;
    TickTransitions::still(grid, &mapper)?.render(1.0, config.ease, config.canvas_width)
}

/// Frames animating one tick, with progress `(i + 1) / n` for `i in 0..n`.
#[tracing::instrument(skip_all, fields(counter = outcome.counter))]
pub fn render_tick_frames(
    outcome: &TickOutcome,
    config: &MorphConfig,
) -> QrMorphResult<Vec<FrameRGBA>> {
    let pool = if config.threading.parallel {
        Some(build_thread_pool(config.threading.threads)?)
    } else {
        None
    };
    render_tick_frames_in(outcome, config, pool.as_ref())
}

fn render_tick_frames_in(
    outcome: &TickOutcome,
    config: &MorphConfig,
    pool: Option<&rayon::ThreadPool>,
) -> QrMorphResult<Vec<FrameRGBA>> {
    let mapper = mapper_for(config)?;
    let transitions = TickTransitions::between(&outcome.from, &outcome.to, &mapper)?;
    let n = config.frames_per_tick();
    let progress = |i: u32| f64::from(i + 1) / f64::from(n);

    let frames: Vec<FrameRGBA> = match pool {
        None => (0..n)
            .map(|i| transitions.render(progress(i), config.ease, config.canvas_width))
            .collect::<QrMorphResult<_>>()?,
        Some(pool) => pool.install(|| {
            (0..n)
                .into_par_iter()
                .map(|i| transitions.render(progress(i), config.ease, config.canvas_width))
                .collect::<QrMorphResult<_>>()
        })?,
    };
    tracing::debug!(
        frames = n,
        offset_tracks = transitions.offset.len(),
        position_tracks = transitions.position.len(),
        "tick rendered"
    );
    Ok(frames)
}

/// Render the initial still, then run the driver for `config.ticks` ticks.
///
/// Ticks whose payload cannot be encoded produce no frames.
#[tracing::instrument(skip_all)]
pub fn render_sequence<E: QrEncoder>(
    driver: &mut MorphDriver<E>,
) -> QrMorphResult<(Vec<FrameRGBA>, RenderStats)> {
    let config = driver.config().clone();
    let pool = if config.threading.parallel {
        Some(build_thread_pool(config.threading.threads)?)
    } else {
        None
    };

    let mut stats = RenderStats::default();
    let mut out = vec![render_still(&driver.current(), &config)?];
    stats.frames_rendered += 1;

    for _ in 0..config.ticks {
        stats.ticks_total += 1;
        let Some(outcome) = driver.tick() else {
            stats.ticks_skipped += 1;
            continue;
        };
        let mut frames = render_tick_frames_in(&outcome, &config, pool.as_ref())?;
        stats.frames_rendered += frames.len() as u64;
        out.append(&mut frames);
    }

    tracing::info!(
        ticks = stats.ticks_total,
        skipped = stats.ticks_skipped,
        frames = stats.frames_rendered,
        "sequence rendered"
    );
    Ok((out, stats))
}

fn build_thread_pool(threads: Option<usize>) -> QrMorphResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(QrMorphError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| QrMorphError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
