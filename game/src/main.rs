use std::{path::Path, time::Duration};

use chunk_engine::{
    assets::materials::{BlockMaterials, MaterialLibrary},
    config::{chunk_config::ChunkConfig, config_manager::Config},
    game_loop::{GameLoop, GameLoopResult},
    voxels::chunk::Chunk,
};

use crate::{client_game::ClientGame, config::ClientConfig};

mod client_game;
mod config;
mod draw_list;
mod fps_counter;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init_timed();
    log::info!("Starting chunk demo...");

    let chunk_config = ChunkConfig::load()?;
    let client_config = ClientConfig::load()?;
    write_default_config(&chunk_config)?;
    write_default_config(&client_config)?;

    let library = MaterialLibrary::from_definitions(
        chunk_config.assets_root.as_str(),
        &chunk_config.materials,
    )?;
    let materials = BlockMaterials::resolve(
        &library,
        &chunk_config.top_material,
        &chunk_config.interior_material,
    )?;

    let chunk = Chunk::new(chunk_config.origin, chunk_config.settings()?, materials)?;
    let game = ClientGame::new(chunk, client_config.clone());
    let mut game_loop = GameLoop::new(game, client_config.game_loop_config());

    loop {
        profiling::scope!("Frame");
        match game_loop.next_frame()? {
            GameLoopResult::Continue => std::thread::sleep(Duration::from_millis(1)),
            GameLoopResult::Exit => break,
        }
        profiling::finish_frame!();
    }

    let loop_stats = game_loop.stats();
    log::info!(
        "Ran {} updates and {} renders in {:.2} s",
        loop_stats.number_of_updates,
        loop_stats.number_of_renders,
        loop_stats.running_time_s
    );
    game_loop.game.fps_counter().log_summary();

    let game = &mut game_loop.game;
    let chunk_stats = game.chunk().stats();
    log::info!("Chunk stats: {:?}", chunk_stats);

    let draw_list = game.draw_list();
    log::info!(
        "Last frame drew {} voxels, {} in front of the camera",
        draw_list.len(),
        draw_list.in_front().count()
    );
    for (material, count) in draw_list.count_by_material() {
        log::debug!("  material {:?}: {} voxels", material, count);
    }
    if let Some(nearest) = draw_list.commands().first() {
        log::debug!(
            "Nearest voxel {:?} at {:?}, depth {:.2}",
            nearest.pos,
            nearest.world_position,
            nearest.depth
        );
    }

    for (material, mesh) in game.chunk().build_mesh() {
        let name = library
            .get(material)
            .map(|entry| entry.name.as_str())
            .unwrap_or("unknown");
        log::info!(
            "Material {}: {} exposed faces ({} vertex bytes, {} index bytes)",
            name,
            mesh.face_count(),
            mesh.vertex_bytes().len(),
            mesh.index_bytes().len()
        );
    }

    game.chunk_mut().shutdown();
    Ok(())
}

/// Writes out the settings in use when the file doesn't exist yet, so they can be edited.
fn write_default_config<C: Config>(config: &C) -> anyhow::Result<()> {
    if Path::new(C::get_path()).exists() {
        return Ok(());
    }

    config.save()?;
    log::info!("Wrote default settings to {}", C::get_path());
    Ok(())
}
