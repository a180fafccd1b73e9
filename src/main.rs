// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use iced_gallery::assets::AssetTable;
use iced_gallery::catalog::Catalog;
use iced_gallery::{config, i18n::fluent::I18n, logging};
use std::process::ExitCode;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let (config, config_warning) = config::load();
    logging::init(&config.logging);

    let i18n = I18n::new(config.general.language.as_deref());

    if let Some(warning) = config_warning {
        match warning.cause {
            Some(cause) => warn!(%cause, "{}", i18n.tr(warning.key)),
            None => warn!("{}", i18n.tr(warning.key)),
        }
    }

    let flags = match Flags::bundled(config) {
        Ok(flags) => flags,
        Err(err) => {
            error!(%err, "{}", i18n.tr(err.i18n_key()));
            return ExitCode::FAILURE;
        }
    };

    report_missing_images(&flags.catalog, &flags.assets);
    info!(
        artworks = flags.catalog.size(),
        images = flags.assets.len(),
        "Starting gallery"
    );

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Gallery window failed");
            ExitCode::FAILURE
        }
    }
}

fn report_missing_images(catalog: &Catalog, assets: &AssetTable) {
    for image in assets.missing(catalog) {
        warn!(image = image.key(), "Catalog references an image that is not bundled");
    }
}
