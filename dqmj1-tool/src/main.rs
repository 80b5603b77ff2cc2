mod image;

use clap::Parser;
use std::io::Write;

#[derive(Clone, Copy, clap::ValueEnum)]
enum Region {
    NorthAmerica,
    Europe,
    Japan,
}

impl From<Region> for dqmj1_dataview::region::Region {
    fn from(region: Region) -> Self {
        match region {
            Region::NorthAmerica => dqmj1_dataview::region::Region::NorthAmerica,
            Region::Europe => dqmj1_dataview::region::Region::Europe,
            Region::Japan => dqmj1_dataview::region::Region::Japan,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StringCategory {
    Species,
    Skills,
    Traits,
    SkillSets,
    Items,
}

#[derive(clap::Parser)]
struct Args {
    /// Region of the image.
    #[clap(long, env = "DQMJ1_REGION", value_enum, default_value = "north-america")]
    region: Region,

    /// Longest run of bytes to read for a single string.
    #[clap(long, default_value_t = dqmj1_dataview::string_table::DEFAULT_MAX_STRING_LENGTH)]
    max_string_length: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct ImageArgs {
    /// Path to the extracted image.
    path: std::path::PathBuf,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Dump encounters.
    Encounters {
        #[command(flatten)]
        image: ImageArgs,
    },

    /// Dump skill sets.
    SkillSets {
        #[command(flatten)]
        image: ImageArgs,
    },

    /// Dump skills.
    Skills {
        #[command(flatten)]
        image: ImageArgs,
    },

    /// Dump a string table.
    Strings {
        #[command(flatten)]
        image: ImageArgs,

        #[clap(value_enum)]
        category: StringCategory,
    },

    /// Decode hex encoded bytes to text.
    Decode { hex: String },

    /// Encode text and print it as hex.
    Encode { text: String },

    /// Change an encounter and write it back.
    EditEncounter {
        #[command(flatten)]
        image: ImageArgs,

        index: usize,

        #[clap(long)]
        gold: Option<u16>,

        #[clap(long)]
        exp: Option<u16>,

        #[clap(long)]
        level: Option<u8>,

        #[clap(long)]
        scout_chance: Option<u8>,
    },
}

struct Context {
    region: dqmj1_dataview::region::Region,
    max_string_length: usize,
}

impl Context {
    fn open(&self, args: &ImageArgs) -> Result<dqmj1_dataview::rom::Rom<image::DirectoryImage>, anyhow::Error> {
        let image = image::DirectoryImage::open(
            &args.path,
            &[
                dqmj1_dataview::table::btl_enmy_prm::FILE_NAME,
                dqmj1_dataview::table::skill_tbl::FILE_NAME,
            ],
        )?;
        Ok(dqmj1_dataview::rom::Rom::new(image, self.region).with_max_string_length(self.max_string_length))
    }
}

pub fn main() -> Result<(), anyhow::Error> {
    env_logger::Builder::from_default_env()
        .filter(Some("dqmj1_tool"), log::LevelFilter::Info)
        .filter(Some("dqmj1_dataview"), log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    let ctx = Context {
        region: args.region.into(),
        max_string_length: args.max_string_length,
    };

    match args.command {
        Command::Encounters { image } => cmd_encounters(&ctx, &image),
        Command::SkillSets { image } => cmd_skill_sets(&ctx, &image),
        Command::Skills { image } => cmd_skills(&ctx, &image),
        Command::Strings { image, category } => cmd_strings(&ctx, &image, category),
        Command::Decode { hex } => cmd_decode(&ctx, &hex),
        Command::Encode { text } => cmd_encode(&ctx, &text),
        Command::EditEncounter {
            image,
            index,
            gold,
            exp,
            level,
            scout_chance,
        } => cmd_edit_encounter(&ctx, &image, index, gold, exp, level, scout_chance),
    }
}

fn write_json(value: &impl serde::Serialize) -> Result<(), anyhow::Error> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    stdout.write_all(b"\n")?;
    Ok(())
}

fn cmd_encounters(ctx: &Context, image: &ImageArgs) -> Result<(), anyhow::Error> {
    let rom = ctx.open(image)?;
    write_json(&*rom.encounters()?)
}

fn cmd_skill_sets(ctx: &Context, image: &ImageArgs) -> Result<(), anyhow::Error> {
    let rom = ctx.open(image)?;
    write_json(&*rom.skill_sets()?)
}

fn cmd_skills(ctx: &Context, image: &ImageArgs) -> Result<(), anyhow::Error> {
    let rom = ctx.open(image)?;
    write_json(&*rom.skills()?)
}

fn cmd_strings(ctx: &Context, image: &ImageArgs, category: StringCategory) -> Result<(), anyhow::Error> {
    let rom = ctx.open(image)?;
    let string_tables = rom.string_tables()?.into_inner();
    write_json(&match category {
        StringCategory::Species => string_tables.species_names,
        StringCategory::Skills => string_tables.skill_names,
        StringCategory::Traits => string_tables.trait_names,
        StringCategory::SkillSets => string_tables.skill_set_names,
        StringCategory::Items => string_tables.item_names,
    })
}

fn cmd_decode(ctx: &Context, hex: &str) -> Result<(), anyhow::Error> {
    let buf = hex::decode(hex)?;
    println!("{}", ctx.region.codec().decode(&buf)?);
    Ok(())
}

fn cmd_encode(ctx: &Context, text: &str) -> Result<(), anyhow::Error> {
    println!("{}", hex::encode(ctx.region.codec().encode(text)?));
    Ok(())
}

fn cmd_edit_encounter(
    ctx: &Context,
    image: &ImageArgs,
    index: usize,
    gold: Option<u16>,
    exp: Option<u16>,
    level: Option<u8>,
    scout_chance: Option<u8>,
) -> Result<(), anyhow::Error> {
    let mut rom = ctx.open(image)?;
    let mut table = rom.btl_enmy_prm()?;
    let num_entries = table.entries.len();
    let entry = table
        .entries
        .get_mut(index)
        .ok_or_else(|| anyhow::anyhow!("encounter {} out of range, there are {}", index, num_entries))?;

    if let Some(gold) = gold {
        entry.gold = gold;
    }
    if let Some(exp) = exp {
        entry.exp = exp;
    }
    if let Some(level) = level {
        entry.level = level;
    }
    if let Some(scout_chance) = scout_chance {
        entry.scout_chance = scout_chance;
    }

    rom.set_btl_enmy_prm(&table)?;
    rom.into_image().save()?;
    Ok(())
}
