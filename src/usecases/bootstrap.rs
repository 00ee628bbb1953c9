use std::path::Path;

use crate::{
    infra::{
        self,
        config::{ConfigOverrides, FileConfigAdapter},
        contracts::ConfigAdapter,
        error::AppError,
    },
    usecases::context::AppContext,
};

pub fn bootstrap(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<AppContext, AppError> {
    let mut context = build_context(config_path, overrides)?;
    context.log_guard = Some(infra::logging::init(&context.config.logging)?);

    Ok(context)
}

fn build_context(
    config_path: Option<&Path>,
    overrides: ConfigOverrides,
) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let mut config = config_adapter.load()?;
    overrides.apply(&mut config);

    Ok(AppContext::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_context_with_default_config_when_file_is_missing() {
        let context = build_context(
            Some(Path::new("./missing-config.toml")),
            ConfigOverrides::default(),
        )
        .expect("context should build from defaults");

        assert_eq!(context.config, crate::infra::config::AppConfig::default());
        assert_eq!(context.room.room(), "");
    }

    #[test]
    fn cli_overrides_reach_room_context() {
        let context = build_context(
            Some(Path::new("./missing-config.toml")),
            ConfigOverrides {
                url: None,
                room_id: Some("room-1-2".to_owned()),
                receiver_id: Some("2".to_owned()),
                product_id: Some("1".to_owned()),
            },
        )
        .expect("context should build");

        assert_eq!(context.room.room(), "room-1-2");
        assert_eq!(context.room.receiver_id(), "2");
        assert_eq!(context.room.product_id(), "1");
    }
}
