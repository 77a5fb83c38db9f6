//! Versioned offline cache for the app's static assets.
//!
//! Lifecycle: `install` precaches the static asset list into the current
//! version's cache, `activate` evicts every cache with another name, and
//! `handle` answers same-origin GET requests cache-first.

use std::collections::{BTreeMap, HashMap};

use url::Url;

use super::fetch::{Fetch, FetchError, Response};

pub const CACHE_NAME: &str = "universe-cache-v1";

/// Paths precached on install, relative to the origin.
pub const STATIC_ASSETS: &[&str] = &["/", "/index.html", "/manifest.json", "/icon-192.png", "/icon-512.png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone)]
pub struct Request {
    pub method: Method,
    pub url: Url,
}

impl Request {
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::Get,
            url,
        }
    }
}

pub struct OfflineCache<F: Fetch> {
    origin: Url,
    current: String,
    caches: BTreeMap<String, HashMap<String, Response>>,
    fetcher: F,
}

impl<F: Fetch> OfflineCache<F> {
    pub fn new(origin: Url, fetcher: F) -> Self {
        Self {
            origin,
            current: CACHE_NAME.to_string(),
            caches: BTreeMap::new(),
            fetcher,
        }
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    pub fn cache_names(&self) -> Vec<&str> {
        self.caches.keys().map(String::as_str).collect()
    }

    /// Create (or keep) a named cache. Old versions left behind by earlier
    /// installs look like this.
    pub fn open(&mut self, name: &str) -> &mut HashMap<String, Response> {
        self.caches.entry(name.to_string()).or_default()
    }

    /// Precache every static asset. All or nothing: one failure leaves the
    /// current cache untouched.
    pub fn install(&mut self) -> Result<usize, FetchError> {
        let mut fetched = Vec::with_capacity(STATIC_ASSETS.len());
        for path in STATIC_ASSETS {
            let url = self.origin.join(path).map_err(|e| FetchError {
                message: format!("Invalid asset path {}: {}", path, e),
            })?;
            let response = self.fetcher.fetch(&url)?;
            if !response.is_ok() {
                return Err(FetchError {
                    message: format!("Precache of {} returned {}", url, response.status),
                });
            }
            fetched.push((url.to_string(), response));
        }
        let count = fetched.len();
        let current = self.current.clone();
        self.open(&current).extend(fetched);
        log::info!("offline cache {} installed ({} assets)", self.current, count);
        Ok(count)
    }

    /// Drop every cache whose name is not the current version.
    pub fn activate(&mut self) -> Vec<String> {
        let stale: Vec<String> = self
            .caches
            .keys()
            .filter(|name| **name != self.current)
            .cloned()
            .collect();
        for name in &stale {
            log::info!("evicting cache {}", name);
            self.caches.remove(name);
        }
        stale
    }

    fn handles(&self, request: &Request) -> bool {
        request.method == Method::Get && request.url.origin() == self.origin.origin()
    }

    pub fn cached(&self, url: &Url) -> Option<&Response> {
        self.caches.get(&self.current)?.get(url.as_str())
    }

    /// Answer a request. `None` means the cache does not handle it and the
    /// caller should go to the network itself.
    pub fn handle(&mut self, request: &Request) -> Option<Result<Response, FetchError>> {
        if !self.handles(request) {
            return None;
        }
        if let Some(hit) = self.cached(&request.url) {
            log::debug!("Cache HIT: {}", request.url);
            return Some(Ok(hit.clone()));
        }
        log::debug!("Cache MISS: {}", request.url);
        let response = match self.fetcher.fetch(&request.url) {
            Ok(r) => r,
            Err(e) => return Some(Err(e)),
        };
        if response.is_ok() {
            let current = self.current.clone();
            self.open(&current)
                .insert(request.url.to_string(), response.clone());
        }
        Some(Ok(response))
    }
}
