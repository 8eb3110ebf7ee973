use std::thread;

use crossbeam_channel::Receiver;

use crate::pipeline::readiness::ModelReadiness;

pub type LoadError = Box<dyn std::error::Error + Send + Sync>;

/// Loads the landmark model on a worker thread.
///
/// On success `readiness` is set, which unlocks sticker mode, and then the
/// model is sent on the returned channel. On failure the error is logged and
/// the flag stays unset, so sticker requests keep being ignored.
pub fn spawn_model_load<T, F>(readiness: ModelReadiness, loader: F) -> Receiver<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, LoadError> + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::bounded(1);
    thread::spawn(move || match loader() {
        Ok(model) => {
            // flag first: whoever receives the model must see it ready
            readiness.mark_ready();
            log::info!("Landmark model ready");
            if tx.send(model).is_err() {
                log::debug!("Model receiver dropped before load finished");
            }
        }
        Err(e) => log::error!("Failed to load landmark model: {e}"),
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::overlay_mode::OverlayMode;
    use crate::pipeline::pipeline_config::PipelineConfig;
    use crate::pipeline::pipeline_state::PipelineState;
    use std::time::Duration;

    #[test]
    fn test_success_delivers_model_and_sets_flag() {
        let readiness = ModelReadiness::new();
        let rx = spawn_model_load(readiness.clone(), || Ok(42u32));

        assert_eq!(rx.recv_timeout(Duration::from_secs(10)).unwrap(), 42);
        assert!(readiness.is_ready());
    }

    #[test]
    fn test_sticker_press_after_receive_is_never_dropped() {
        for _ in 0..2000 {
            let readiness = ModelReadiness::new();
            let rx = spawn_model_load(readiness.clone(), || Ok(1u8));
            rx.recv_timeout(Duration::from_secs(10)).unwrap();

            let mut state = PipelineState::new(readiness, &PipelineConfig::default());
            state.advance_sticker();
            assert_eq!(state.mode(), OverlayMode::Sticker(1));
        }
    }

    #[test]
    fn test_failure_leaves_flag_unset() {
        let readiness = ModelReadiness::new();
        let rx = spawn_model_load::<u32, _>(readiness.clone(), || Err("corrupt model".into()));

        assert!(rx.recv_timeout(Duration::from_secs(10)).is_err());
        assert!(!readiness.is_ready());
    }
}
