use std::io::{BufRead, Write};

use rand::{CryptoRng, RngCore};

use crate::config::{parse_subwallet_id, SeedSource, Selection};
use crate::error::WalletError;
use crate::seed::{generate_seed, read_phrase, SeedPhrase};

/// Runs the interactive prompt sequence: seed source, network, version,
/// subwallet, in that order. Generic over the input/output streams so tests
/// can drive it with canned transcripts.
pub fn collect_selection<R, W, G>(
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> Result<Selection, WalletError>
where
    R: BufRead,
    W: Write,
    G: RngCore + CryptoRng,
{
    let seed = prompt_seed(input, output, rng)?;
    let network = prompt_network(input, output)?;
    let version = prompt_version(input, output)?;
    let is_v5 = matches!(version, "v5r1beta" | "v5r1final");
    let subwallet = prompt_subwallet(input, output, is_v5)?;

    Ok(Selection {
        seed: SeedSource::Words(seed),
        network: Some(network.to_string()),
        version: Some(version.to_string()),
        subwallet,
    })
}

fn read_line<R: BufRead>(input: &mut R, field: &'static str) -> Result<String, WalletError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(WalletError::InputRead(field));
    }
    Ok(line.trim().to_string())
}

fn prompt_seed<R, W, G>(
    input: &mut R,
    output: &mut W,
    rng: &mut G,
) -> Result<SeedPhrase, WalletError>
where
    R: BufRead,
    W: Write,
    G: RngCore + CryptoRng,
{
    write!(output, "Generate new seed phrase? (y/n): ")?;
    output.flush()?;
    let answer = read_line(input, "seed source")?;

    if answer.eq_ignore_ascii_case("y") {
        let seed = generate_seed(rng);
        writeln!(output)?;
        writeln!(output, "⚠️  Your new seed phrase (SAVE THIS SECURELY):")?;
        writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(output, "{}", seed.joined())?;
        writeln!(output, "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━")?;
        writeln!(output)?;
        return Ok(seed);
    }

    writeln!(output)?;
    writeln!(output, "Enter your seed phrase (24 words in any format):")?;
    writeln!(output, "  • Accepts spaces, commas, tabs, or line breaks")?;
    writeln!(output, "  • Paste multiple lines or single line - both work!")?;
    writeln!(output)?;

    let seed = read_phrase(input, output)?;
    writeln!(output, "✓ Successfully parsed {} words", seed.words().len())?;
    writeln!(output)?;
    Ok(seed)
}

fn prompt_network<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<&'static str, WalletError> {
    writeln!(output)?;
    writeln!(output, "Select network:")?;
    writeln!(output, "  1. Mainnet")?;
    writeln!(output, "  2. Testnet")?;
    write!(output, "\nChoice (1-2): ")?;
    output.flush()?;

    let choice = read_line(input, "network choice")?;
    let network = match choice.as_str() {
        "1" => {
            writeln!(output, "✓ Using Mainnet")?;
            "mainnet"
        }
        "2" => {
            writeln!(output, "✓ Using Testnet")?;
            "testnet"
        }
        _ => {
            writeln!(output, "⚠ Invalid choice, defaulting to Mainnet")?;
            "mainnet"
        }
    };
    writeln!(output)?;
    Ok(network)
}

fn prompt_version<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<&'static str, WalletError> {
    writeln!(output, "Available wallet versions:")?;
    writeln!(output, "  1. V3R1")?;
    writeln!(output, "  2. V3R2")?;
    writeln!(output, "  3. V4R1")?;
    writeln!(output, "  4. V4R2 (recommended)")?;
    writeln!(output, "  5. V5R1 Beta")?;
    writeln!(output, "  6. V5R1 Final")?;
    write!(output, "\nChoice (1-6): ")?;
    output.flush()?;

    let choice = read_line(input, "version choice")?;
    writeln!(output)?;

    Ok(match choice.as_str() {
        "1" => "v3r1",
        "2" => "v3r2",
        "3" => "v4r1",
        "4" => "v4r2",
        "5" => "v5r1beta",
        "6" => "v5r1final",
        _ => {
            writeln!(output, "⚠ Invalid choice, defaulting to V4R2")?;
            writeln!(output)?;
            "v4r2"
        }
    })
}

fn prompt_subwallet<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    is_v5: bool,
) -> Result<Option<u32>, WalletError> {
    let default_desc = if is_v5 {
        "0 (W5 compatible)"
    } else {
        "698983191 (standard)"
    };

    writeln!(output, "Subwallet ID options:")?;
    writeln!(output, "  • Press Enter for default ({default_desc})")?;
    writeln!(output, "  • Enter custom number for multiple wallets from same seed")?;
    write!(output, "\nSubwallet ID: ")?;
    output.flush()?;

    let entry = read_line(input, "subwallet ID")?;
    if entry.is_empty() {
        writeln!(output, "✓ Using default subwallet ID ({default_desc})")?;
        return Ok(None);
    }

    // A malformed value is a hard failure, not a retry loop.
    let id = parse_subwallet_id(&entry)?;
    writeln!(output, "✓ Using custom subwallet ID ({id})")?;
    Ok(Some(id))
}
