use std::collections::HashSet;
use std::panic;

use bubbletext_core::{Stage, format_for_display, normalize, trace_stages};

const CASES: usize = 300;
const MAX_LEN: usize = 256;
const CHARSET: &[u8] = b"abcXYZ019 \n\r\t*_*_**()<>&;:.,!?\"'/=-";
const PLAIN_CHARSET: &[u8] = b"abcdefXYZ0123456789 \n\r\t()[]{};:.,!?\"'/=-#@$%";

const OPEN: &str = "<strong>";
const CLOSE: &str = "</strong>";

#[test]
fn formatting_never_panics_on_random_input() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x5b1d_9e37_a4c2_0f61);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, CHARSET, len);
        let result = panic::catch_unwind(|| format_for_display(Some(&source)));
        if result.is_err() {
            return Err(format!("format panicked for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

#[test]
fn output_contains_only_strong_markup() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x0c3f_71aa_8d52_e914);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, CHARSET, len);
        let html = format_for_display(Some(&source));
        if let Err(message) = check_markup(&html) {
            return Err(format!(
                "markup check failed for case {}: {}\nSource: {:?}\nOutput: {:?}",
                case, message, source, html
            )
            .into());
        }
    }
    Ok(())
}

#[test]
fn sanitizer_keeps_every_strong_pair() -> Result<(), Box<dyn std::error::Error>> {
    let tags: HashSet<&str> = ["strong"].into_iter().collect();
    let mut rng = Lcg::new(0x6e2b_c019_55d7_3a8f);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, CHARSET, len);
        let html = format_for_display(Some(&source));
        let cleaned = ammonia::Builder::default()
            .tags(tags.clone())
            .clean(&html)
            .to_string();
        if cleaned.matches(OPEN).count() != html.matches(OPEN).count() {
            return Err(format!(
                "sanitizer changed strong tags for case {}\nOutput: {:?}\nCleaned: {:?}",
                case, html, cleaned
            )
            .into());
        }
    }
    Ok(())
}

#[test]
fn plain_text_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0xd40e_2871_9bb3_c6a5);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, PLAIN_CHARSET, len);
        let expected = normalize(Some(&source));
        let actual = format_for_display(Some(&source));
        if actual != expected {
            return Err(format!(
                "plain text changed for case {}: {:?} -> {:?}",
                case, source, actual
            )
            .into());
        }
    }
    Ok(())
}

#[test]
fn normalize_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x19a7_44f0_e2c8_5d3b);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, CHARSET, len);
        let once = normalize(Some(&source));
        if normalize(Some(&once)) != once {
            return Err(format!("normalize not idempotent for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

#[test]
fn stages_compose_to_the_full_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = Lcg::new(0x83e6_0b5c_f1d9_2a47);
    for case in 0..CASES {
        let len = rng.gen_range(0, MAX_LEN + 1);
        let source = random_string(&mut rng, CHARSET, len);
        let composed = Stage::ALL
            .iter()
            .fold(source.clone(), |text, stage| stage.apply(&text));
        let traced = trace_stages(Some(&source));
        let last = traced.last().map(|(_, text)| text.clone()).unwrap_or_default();
        if composed != format_for_display(Some(&source)) || composed != last {
            return Err(format!("stage composition differs for case {}: {:?}", case, source).into());
        }
    }
    Ok(())
}

fn check_markup(html: &str) -> Result<(), String> {
    let mut rest = html;
    let mut open = false;
    while let Some(idx) = rest.find(['<', '>', '&']) {
        let tail = &rest[idx..];
        if tail.starts_with(OPEN) {
            if open {
                return Err(format!("nested strong at {:?}", tail));
            }
            open = true;
            rest = &tail[OPEN.len()..];
        } else if tail.starts_with(CLOSE) {
            if !open {
                return Err(format!("unmatched close at {:?}", tail));
            }
            open = false;
            rest = &tail[CLOSE.len()..];
        } else if tail.starts_with("&amp;") {
            rest = &tail[5..];
        } else if tail.starts_with("&lt;") || tail.starts_with("&gt;") {
            rest = &tail[4..];
        } else {
            return Err(format!("raw markup character at {:?}", tail));
        }
    }
    if open {
        return Err("unclosed strong".to_string());
    }
    Ok(())
}

fn random_string(rng: &mut Lcg, charset: &[u8], len: usize) -> String {
    let mut out = String::with_capacity(len);
    for _ in 0..len {
        let idx = rng.gen_range(0, charset.len());
        let byte = charset.get(idx).copied().unwrap_or(b' ');
        out.push(byte as char);
    }
    out
}

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn gen_range(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        let span = max - min;
        let value = (self.next() >> 33) as usize;
        min + (value % span)
    }
}
