// SPDX-License-Identifier: AGPL-3.0-or-later
// © 2025 Ryo ∴ SpiralArchitect (kishkavsesvit@icloud.com)
// Part of SpectralSphere — Licensed under AGPL-3.0-or-later.
// Unauthorized derivative works or closed redistribution prohibited under AGPL §13.

//! Loading the engine module asset.
//!
//! Before a fetched module counts as loaded, two checks run: the asset must
//! actually exist, and it must not be an HTML document. The second check is
//! the signature of a misconfigured deployment – the module path 404s and an
//! error page is served in its place, sometimes with a perfectly confident
//! `Content-Type`. Both the declared content type and the leading bytes are
//! inspected, and a violation names the offending asset path.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::engine::SpectralEngine;

/// A fetched module asset, prior to validation.
#[derive(Clone, Debug)]
pub struct ModuleAsset {
    /// Path the asset was fetched from.
    pub path: String,
    /// Declared content type, if the transport reported one.
    pub content_type: Option<String>,
    /// Raw module bytes.
    pub bytes: Vec<u8>,
}

/// Why a load attempt failed. Cloneable so one cached outcome can be handed
/// to every caller awaiting the same load.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoadError {
    /// The asset is absent or unreachable.
    #[error("engine module '{path}' is unreachable")]
    Missing { path: String },

    /// An HTML document was served where the module should be – the usual
    /// fallback page standing in for a missing asset.
    #[error("engine module '{path}' was served as '{content_type}'; the asset path is misconfigured")]
    HtmlFallback { path: String, content_type: String },

    /// The asset fetched cleanly but could not be instantiated.
    #[error("engine module '{path}' failed to initialise: {message}")]
    Init { path: String, message: String },
}

/// Transport seam for retrieving the module asset.
///
/// `None` means the asset does not exist or cannot be reached; the loader
/// turns that into [`LoadError::Missing`].
#[async_trait]
pub trait ModuleFetcher: Send + Sync {
    async fn fetch(&self, path: &str) -> Option<ModuleAsset>;
}

/// Producer of live engines from validated module bytes.
pub type InstantiateFn =
    dyn Fn(&ModuleAsset) -> Result<Arc<dyn SpectralEngine>, String> + Send + Sync;

/// Asynchronous engine load with a single observable outcome.
#[async_trait]
pub trait EngineLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn SpectralEngine>, LoadError>;
}

/// Loader that fetches the module asset, validates it, and instantiates the
/// engine.
pub struct ModuleLoader {
    fetcher: Arc<dyn ModuleFetcher>,
    path: String,
    instantiate: Arc<InstantiateFn>,
}

impl ModuleLoader {
    pub fn new(
        fetcher: Arc<dyn ModuleFetcher>,
        path: impl Into<String>,
        instantiate: Arc<InstantiateFn>,
    ) -> Self {
        Self {
            fetcher,
            path: path.into(),
            instantiate,
        }
    }

    /// Asset path this loader resolves.
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl EngineLoader for ModuleLoader {
    async fn load(&self) -> Result<Arc<dyn SpectralEngine>, LoadError> {
        let Some(asset) = self.fetcher.fetch(&self.path).await else {
            return Err(LoadError::Missing {
                path: self.path.clone(),
            });
        };
        validate_module_asset(&asset)?;
        debug!(path = %self.path, bytes = asset.bytes.len(), "engine module fetched");
        (self.instantiate)(&asset).map_err(|message| LoadError::Init {
            path: self.path.clone(),
            message,
        })
    }
}

/// Reject assets that are HTML documents rather than engine modules.
///
/// Checks the declared content type first, then sniffs the leading bytes so
/// a fallback page served with a non-HTML content type is still caught.
pub fn validate_module_asset(asset: &ModuleAsset) -> Result<(), LoadError> {
    if let Some(content_type) = &asset.content_type {
        if content_type.to_ascii_lowercase().contains("text/html") {
            return Err(LoadError::HtmlFallback {
                path: asset.path.clone(),
                content_type: content_type.clone(),
            });
        }
    }
    if looks_like_html(&asset.bytes) {
        return Err(LoadError::HtmlFallback {
            path: asset.path.clone(),
            content_type: asset
                .content_type
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        });
    }
    Ok(())
}

fn looks_like_html(bytes: &[u8]) -> bool {
    let head: Vec<u8> = bytes
        .iter()
        .skip_while(|byte| byte.is_ascii_whitespace())
        .take(16)
        .map(|byte| byte.to_ascii_lowercase())
        .collect();
    head.starts_with(b"<!doctype") || head.starts_with(b"<html")
}
