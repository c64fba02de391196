use const_format::concatcp;

pub const PAGE_STYLE: &str = concatcp!(shared_data::BASE_STYLE, r#"
#nav {
	position: sticky;
	top: 0;
	z-index: 50;
	display: flex;
	justify-content: space-between;
	align-items: center;
	gap: 16px;
	padding: 12px 24px;
	border-bottom: 1px solid var(--card-border);
	background: rgba(251, 250, 247, 0.85);
	backdrop-filter: blur(6px);
}
#nav-links {
	display: flex;
	gap: 4px;
	flex-wrap: wrap;
}
#nav-links a {
	border-radius: 16px;
	padding: 8px 12px;
	font-size: 14px;
	text-decoration: none;
	color: rgba(42, 32, 24, 0.7);
}
#nav-links a:hover {
	background: rgba(0, 0, 0, 0.05);
	color: var(--ink);
}
#hero {
	position: relative;
	padding: 64px 24px 40px 24px;
	background-size: cover;
	background-position: center;
	color: var(--cream);
}
#hero::before {
	content: "";
	position: absolute;
	inset: 0;
	background: linear-gradient(to bottom, rgba(0, 0, 0, 0.55), rgba(0, 0, 0, 0.25), var(--cream));
}
#hero > * {
	position: relative;
}
#hero h1 {
	font-size: 56px;
	margin: 16px 0;
	color: white;
	text-shadow: 0 10px 30px rgba(0, 0, 0, 0.55);
}
#hero .subtitle, #hero .where-and-when, #hero .where-and-when * {
	color: rgba(255, 255, 255, 0.88);
	text-shadow: 0 8px 22px rgba(0, 0, 0, 0.45);
}
section {
	max-width: 1100px;
	margin: 0 auto;
	padding: 40px 24px 0 24px;
	scroll-margin-top: 90px;
}
section > h2 {
	font-size: 30px;
	margin-bottom: 6px;
}
section > .kicker {
	font-size: 12px;
	font-weight: 600;
	letter-spacing: 0.2em;
	text-transform: uppercase;
	color: rgba(42, 32, 24, 0.55);
}
section > .rule {
	height: 4px;
	width: 80px;
	border-radius: 999px;
	background: linear-gradient(to right, rgba(139, 47, 47, 0.55), rgba(200, 162, 90, 0.65), rgba(47, 74, 58, 0.55));
	margin-bottom: 20px;
}
.card-grid {
	display: grid;
	gap: 16px;
	grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
}
.card h3 {
	margin: 0 0 6px 0;
	font-size: 17px;
}
.card .muted {
	color: rgba(42, 32, 24, 0.7);
}
.card .fine {
	font-size: 14px;
	color: rgba(42, 32, 24, 0.6);
}
#countdown-card {
	max-width: 520px;
	margin-top: 24px;
}
#countdown-digits {
	display: grid;
	grid-template-columns: repeat(4, 1fr);
	gap: 12px;
	text-align: center;
}
#countdown-digits .digit {
	border: 1px solid var(--card-border);
	border-radius: 16px;
	background: white;
	padding: 12px;
}
#countdown-digits .digit b {
	font-variant-numeric: tabular-nums;
	font-size: 26px;
}
#countdown-digits .digit span {
	display: block;
	margin-top: 4px;
	font-size: 12px;
	color: rgba(42, 32, 24, 0.6);
}
iframe {
	width: 100%;
	border: none;
	border-radius: 16px;
	background: white;
}
#rsvp iframe {
	height: 820px;
}
#venue iframe {
	height: 320px;
}
#gallery .featured {
	position: relative;
	border-radius: 24px;
	overflow: hidden;
}
#gallery img {
	width: 100%;
	object-fit: cover;
	border-radius: 24px;
	display: block;
}
#gallery .featured img {
	height: 420px;
}
#gallery .thumbs {
	display: grid;
	gap: 16px;
	grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
	margin-top: 16px;
}
#gallery .thumbs img {
	height: 192px;
}
#gallery .caption {
	position: absolute;
	left: 16px;
	right: 16px;
	bottom: 12px;
	color: white;
	text-shadow: 0 2px 12px rgba(0, 0, 0, 0.8);
}
#gallery .thumb {
	position: relative;
}
.hotel {
	display: block;
	border: 1px solid var(--card-border);
	border-radius: 16px;
	background: white;
	padding: 16px;
	margin-top: 12px;
	text-decoration: none;
}
.hotel:hover {
	background: rgba(0, 0, 0, 0.02);
}
.hotel .area {
	font-size: 14px;
	color: rgba(42, 32, 24, 0.6);
}
.note-box {
	border-radius: 16px;
	background: rgba(0, 0, 0, 0.05);
	padding: 16px;
	font-size: 14px;
	color: rgba(42, 32, 24, 0.7);
	margin-top: 12px;
}
.placeholder {
	border: 1px solid var(--card-border);
	border-radius: 16px;
	background: white;
	padding: 16px;
	font-size: 14px;
	color: rgba(42, 32, 24, 0.6);
	margin-top: 16px;
}
footer {
	margin-top: 40px;
	border-top: 1px solid var(--card-border);
	padding: 32px 24px;
	font-size: 14px;
	color: rgba(42, 32, 24, 0.6);
	text-align: center;
}
"#);
