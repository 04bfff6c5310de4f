//! M3U8/HLS manifest resolution.

use crate::api::Transport;
use crate::error::{Error, Result};

/// One quality variant of a master playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistVariant {
    /// Horizontal resolution in pixels.
    pub resolution_width: u64,

    pub resolution_height: u64,

    /// Peak bandwidth in bits per second.
    pub bandwidth: u64,

    /// Absolute URL of the variant's media playlist.
    pub source_url: String,
}

/// One media segment, in playback order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub url: String,
}

/// Fetch a master playlist and list its variants.
pub async fn load_variants(
    transport: &dyn Transport,
    master_url: &str,
) -> Result<Vec<PlaylistVariant>> {
    tracing::debug!("Loading master playlist {}", master_url);
    let content = transport.get_bytes(master_url).await?;
    parse_variants(master_url, &content)
}

/// Fetch a variant's media playlist and list its segments.
pub async fn load_segments(
    transport: &dyn Transport,
    variant: &PlaylistVariant,
) -> Result<Vec<Segment>> {
    tracing::debug!("Loading media playlist {}", variant.source_url);
    let content = transport.get_bytes(&variant.source_url).await?;
    parse_segments(&variant.source_url, &content)
}

/// Parse master playlist content into variants with a known resolution.
pub fn parse_variants(master_url: &str, content: &[u8]) -> Result<Vec<PlaylistVariant>> {
    let playlist = m3u8_rs::parse_playlist_res(content)
        .map_err(|e| Error::M3U8(format!("Failed to parse playlist: {:?}", e)))?;

    let master = match playlist {
        m3u8_rs::Playlist::MasterPlaylist(master) => master,
        m3u8_rs::Playlist::MediaPlaylist(_) => {
            return Err(Error::ManifestEmpty(format!(
                "{} is a media playlist, not a master playlist",
                master_url
            )))
        }
    };

    let mut variants = Vec::with_capacity(master.variants.len());
    for variant in &master.variants {
        if variant.is_i_frame {
            continue;
        }

        let Some(resolution) = &variant.resolution else {
            tracing::debug!("Skipping variant without resolution: {}", variant.uri);
            continue;
        };

        variants.push(PlaylistVariant {
            resolution_width: resolution.width,
            resolution_height: resolution.height,
            bandwidth: variant.bandwidth,
            source_url: resolve_url(master_url, &variant.uri)?,
        });
    }

    if variants.is_empty() {
        return Err(Error::ManifestEmpty(master_url.to_string()));
    }

    Ok(variants)
}

/// Parse media playlist content into absolute segment URLs.
pub fn parse_segments(variant_url: &str, content: &[u8]) -> Result<Vec<Segment>> {
    let playlist = m3u8_rs::parse_playlist_res(content)
        .map_err(|e| Error::M3U8(format!("Failed to parse media playlist: {:?}", e)))?;

    let media = match playlist {
        m3u8_rs::Playlist::MediaPlaylist(media) => media,
        m3u8_rs::Playlist::MasterPlaylist(_) => {
            return Err(Error::M3U8("Expected media playlist".into()))
        }
    };

    let segments = media
        .segments
        .iter()
        .map(|seg| {
            Ok(Segment {
                url: resolve_url(variant_url, &seg.uri)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if segments.is_empty() {
        return Err(Error::M3U8("No segments found in playlist".into()));
    }

    Ok(segments)
}

/// Resolve a potentially relative URL against a base URL.
fn resolve_url(base: &str, path: &str) -> Result<String> {
    if path.starts_with("http://") || path.starts_with("https://") {
        return Ok(path.to_string());
    }

    let base_url = url::Url::parse(base)?;
    let resolved = base_url.join(path)?;
    Ok(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeTransport;

    const MASTER_URL: &str = "https://fms.example.de/vod/_definst_/mp4:abc.mp4/playlist.m3u8";

    const MASTER: &str = "#EXTM3U
#EXT-X-VERSION:3
#EXT-X-STREAM-INF:BANDWIDTH=800000,RESOLUTION=640x360
chunklist_w1_b800000.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=2500000,RESOLUTION=1280x720
chunklist_w1_b2500000.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=64000,CODECS=\"mp4a.40.2\"
audio_only.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=5000000,RESOLUTION=1920x1080
https://cdn.example.de/full/chunklist_b5000000.m3u8
";

    const MEDIA: &str = "#EXTM3U
#EXT-X-VERSION:3
#EXT-X-TARGETDURATION:10
#EXT-X-MEDIA-SEQUENCE:0
#EXTINF:10.0,
media_0.ts
#EXTINF:10.0,
media_1.ts
#EXTINF:4.5,
https://cdn.example.de/media_2.ts
#EXT-X-ENDLIST
";

    #[test]
    fn test_parse_variants() {
        let variants = parse_variants(MASTER_URL, MASTER.as_bytes()).unwrap();
        let widths: Vec<_> = variants.iter().map(|v| v.resolution_width).collect();
        assert_eq!(widths, vec![640, 1280, 1920]);

        assert_eq!(variants[0].resolution_height, 360);
        assert_eq!(variants[0].bandwidth, 800000);
        assert_eq!(
            variants[0].source_url,
            "https://fms.example.de/vod/_definst_/mp4:abc.mp4/chunklist_w1_b800000.m3u8"
        );
        assert_eq!(
            variants[2].source_url,
            "https://cdn.example.de/full/chunklist_b5000000.m3u8"
        );
    }

    #[test]
    fn test_master_without_resolutions_is_empty() {
        let master = "#EXTM3U
#EXT-X-STREAM-INF:BANDWIDTH=64000
audio.m3u8
";
        assert!(matches!(
            parse_variants(MASTER_URL, master.as_bytes()),
            Err(Error::ManifestEmpty(_))
        ));
    }

    #[test]
    fn test_media_playlist_as_master_is_empty() {
        assert!(matches!(
            parse_variants(MASTER_URL, MEDIA.as_bytes()),
            Err(Error::ManifestEmpty(_))
        ));
    }

    #[test]
    fn test_parse_segments_keeps_order() {
        let variant_url = "https://fms.example.de/vod/_definst_/mp4:abc.mp4/chunklist.m3u8";
        let segments = parse_segments(variant_url, MEDIA.as_bytes()).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment {
                    url: "https://fms.example.de/vod/_definst_/mp4:abc.mp4/media_0.ts".into()
                },
                Segment {
                    url: "https://fms.example.de/vod/_definst_/mp4:abc.mp4/media_1.ts".into()
                },
                Segment {
                    url: "https://cdn.example.de/media_2.ts".into()
                },
            ]
        );
    }

    #[test]
    fn test_parse_segments_rejects_master() {
        assert!(matches!(
            parse_segments(MASTER_URL, MASTER.as_bytes()),
            Err(Error::M3U8(_))
        ));
    }

    #[tokio::test]
    async fn test_load_variants_and_segments() {
        let variant_url =
            "https://fms.example.de/vod/_definst_/mp4:abc.mp4/chunklist_w1_b2500000.m3u8";
        let transport = FakeTransport::new()
            .with_page(MASTER_URL, MASTER)
            .with_page(variant_url, MEDIA);

        let variants = load_variants(&transport, MASTER_URL).await.unwrap();
        let segments = load_segments(&transport, &variants[1]).await.unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(
            transport.requests(),
            vec![format!("GET {}", MASTER_URL), format!("GET {}", variant_url)]
        );
    }
}
