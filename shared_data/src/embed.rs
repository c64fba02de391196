use url::form_urlencoded;

/// Query param that tells the form host to render its minimal, frameable layout
pub const EMBED_MARKER: &str = "embed=true";

/// Path fragment that marks a URL as one of the known form-hosting service's
/// response pages (the only kind we know how to embed)
const FORM_HOST_MARKER: &str = "ResponsePage.aspx";

/// Derives the URL we actually put in the RSVP iframe.
///
/// If the configured URL points at the known form host and doesn't already
/// carry the embed marker, we tack it on (with `?` or `&` as appropriate).
/// Anything else passes through untouched, so running this twice gives the
/// same answer as running it once.
#[must_use]
pub fn form_embed_url(url: &str) -> String {
	let url = url.trim();

	if url.contains(FORM_HOST_MARKER) && !url.to_lowercase().contains(EMBED_MARKER) {
		let sep = if url.contains('?') { '&' } else { '?' };
		return format!("{url}{sep}{EMBED_MARKER}");
	}

	url.to_string()
}

fn maps_query(venue_name: &str, venue_address: &str) -> String {
	form_urlencoded::byte_serialize(format!("{venue_name} {venue_address}").as_bytes())
		.collect()
}

#[must_use]
pub fn maps_search_url(venue_name: &str, venue_address: &str) -> String {
	format!(
		"https://www.google.com/maps/search/?api=1&query={}",
		maps_query(venue_name, venue_address)
	)
}

#[must_use]
pub fn maps_directions_url(venue_name: &str, venue_address: &str) -> String {
	format!(
		"https://www.google.com/maps/dir/?api=1&destination={}",
		maps_query(venue_name, venue_address)
	)
}

#[must_use]
pub fn maps_embed_url(venue_name: &str, venue_address: &str) -> String {
	format!(
		"https://www.google.com/maps?q={}&output=embed",
		maps_query(venue_name, venue_address)
	)
}
