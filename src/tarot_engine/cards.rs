//! The 78-card Rider–Waite–Smith catalogue.
//!
//! The table is built on first access and never mutated afterwards, so the
//! returned references are `'static` and can be shared across threads freely.
//! Canonical order is the 22 trumps (The Fool .. The World) followed by the
//! Wands, Cups, Swords and Pentacles suits, each Ace .. King. A card's id is
//! its index in that order.

use std::sync::OnceLock;

use crate::tarot_engine::{
    error::{DrawError, DrawResult},
    models::{Arcana, Card, CardId, Rank, Suit},
};

pub const DECK_SIZE: usize = 78;
pub const MAJOR_ARCANA_COUNT: usize = 22;

/// (name, upright, reversed) for each trump in number order.
const MAJOR_ARCANA: [(&str, &str, &str); MAJOR_ARCANA_COUNT] = [
    ("The Fool", "New beginnings, spontaneity, a leap of faith", "Recklessness, hesitation, naivety"),
    ("The Magician", "Willpower, skill, manifestation", "Manipulation, untapped talent, trickery"),
    ("The High Priestess", "Intuition, hidden knowledge, the subconscious", "Secrets, withdrawal, ignored intuition"),
    ("The Empress", "Abundance, nurturing, fertility", "Dependence, creative block, smothering"),
    ("The Emperor", "Authority, structure, stability", "Rigidity, domination, lack of discipline"),
    ("The Hierophant", "Tradition, institutions, spiritual guidance", "Rebellion, nonconformity, new approaches"),
    ("The Lovers", "Love, harmony, meaningful choices", "Imbalance, misalignment, conflicting values"),
    ("The Chariot", "Determination, control, victory", "Lack of direction, aggression, scattered will"),
    ("Strength", "Courage, patience, gentle influence", "Self-doubt, weakness, raw emotion"),
    ("The Hermit", "Introspection, solitude, inner guidance", "Isolation, loneliness, withdrawal"),
    ("Wheel of Fortune", "Cycles, fate, turning points", "Bad luck, resistance to change, broken cycles"),
    ("Justice", "Fairness, truth, cause and effect", "Injustice, dishonesty, avoided accountability"),
    ("The Hanged Man", "Surrender, new perspective, pause", "Stalling, needless sacrifice, indecision"),
    ("Death", "Endings, transformation, transition", "Resistance to change, stagnation, lingering"),
    ("Temperance", "Balance, moderation, patience", "Excess, imbalance, lack of long-term vision"),
    ("The Devil", "Attachment, temptation, bondage", "Release, breaking free, reclaiming power"),
    ("The Tower", "Sudden upheaval, revelation, collapse", "Averted disaster, fear of change, delayed reckoning"),
    ("The Star", "Hope, renewal, serenity", "Despair, disconnection, lost faith"),
    ("The Moon", "Illusion, intuition, uncertainty", "Clarity returning, released fear, confusion lifting"),
    ("The Sun", "Joy, success, vitality", "Temporary gloom, dimmed optimism, overconfidence"),
    ("Judgement", "Awakening, reckoning, renewal", "Self-doubt, harsh self-judgement, ignoring the call"),
    ("The World", "Completion, integration, fulfilment", "Unfinished business, lack of closure, shortcuts"),
];

/// (upright, reversed) per suit, indexed like [`Rank::ALL`].
const WANDS: [(&str, &str); 14] = [
    ("Inspiration, new venture, creative spark", "Delays, lack of direction, false start"),
    ("Planning, future vision, decisions", "Fear of the unknown, poor planning"),
    ("Expansion, foresight, progress", "Obstacles, delays, frustration"),
    ("Celebration, homecoming, harmony", "Unstable foundations, transition, cancelled plans"),
    ("Competition, conflict, rivalry", "Avoided conflict, inner tension, truce"),
    ("Victory, recognition, success", "Ego, fall from grace, lack of recognition"),
    ("Defence, perseverance, standing ground", "Overwhelm, giving up, exhaustion"),
    ("Swift action, momentum, news", "Haste, scattered energy, waiting"),
    ("Resilience, persistence, last stand", "Paranoia, fatigue, defensiveness"),
    ("Burden, responsibility, hard work", "Delegation, release, collapse under strain"),
    ("Enthusiasm, exploration, discovery", "Impatience, lack of direction, setbacks"),
    ("Energy, adventure, impulsiveness", "Recklessness, haste, frustration"),
    ("Confidence, warmth, determination", "Jealousy, insecurity, demanding nature"),
    ("Leadership, vision, boldness", "Impulsiveness, overbearing, unreachable goals"),
];

const CUPS: [(&str, &str); 14] = [
    ("New love, compassion, emotional opening", "Blocked feelings, emptiness, self-love needed"),
    ("Partnership, attraction, mutual respect", "Imbalance, broken bond, tension"),
    ("Friendship, celebration, community", "Overindulgence, gossip, isolation"),
    ("Apathy, contemplation, reevaluation", "Renewed interest, acceptance, new awareness"),
    ("Loss, grief, regret", "Acceptance, moving on, forgiveness"),
    ("Nostalgia, childhood memories, innocence", "Living in the past, moving forward"),
    ("Choices, fantasy, illusion", "Clarity, focus, decisiveness"),
    ("Walking away, disillusionment, seeking more", "Fear of change, aimless drifting"),
    ("Contentment, satisfaction, wishes granted", "Smugness, dissatisfaction, materialism"),
    ("Harmony, family, emotional fulfilment", "Disconnection, broken home, misaligned values"),
    ("Curiosity, creative opportunity, intuitive message", "Emotional immaturity, creative block"),
    ("Romance, charm, following the heart", "Moodiness, unrealistic expectations"),
    ("Compassion, calm, emotional security", "Insecurity, codependence, martyrdom"),
    ("Emotional balance, diplomacy, generosity", "Manipulation, coldness, volatility"),
];

const SWORDS: [(&str, &str); 14] = [
    ("Breakthrough, clarity, truth", "Confusion, chaos, misused force"),
    ("Difficult choice, stalemate, avoidance", "Indecision, information overload, lesser evil"),
    ("Heartbreak, sorrow, painful truth", "Recovery, forgiveness, releasing pain"),
    ("Rest, recuperation, contemplation", "Restlessness, burnout, stagnation"),
    ("Conflict, defeat, winning at all costs", "Reconciliation, making amends, past resentment"),
    ("Transition, moving on, calmer waters", "Unfinished business, resistance to change"),
    ("Deception, strategy, stealth", "Confession, conscience, getting caught"),
    ("Restriction, self-imposed limits, feeling trapped", "Release, new perspective, self-acceptance"),
    ("Anxiety, worry, nightmares", "Hope, reaching out, despair lifting"),
    ("Painful ending, rock bottom, betrayal", "Recovery, regeneration, resisting the inevitable"),
    ("Curiosity, new ideas, vigilance", "Deception, all talk, haste"),
    ("Ambition, drive, fast thinking", "Impulsiveness, no direction, burnout"),
    ("Clear boundaries, independence, honest judgement", "Bitterness, cruelty, coldness"),
    ("Intellectual authority, truth, clear thinking", "Manipulation, tyranny, abuse of power"),
];

const PENTACLES: [(&str, &str); 14] = [
    ("New opportunity, prosperity, manifestation", "Missed opportunity, poor planning, scarcity"),
    ("Balance, adaptability, juggling priorities", "Overcommitment, disorganisation"),
    ("Teamwork, craftsmanship, learning", "Disharmony, poor work, lack of collaboration"),
    ("Security, conservation, control", "Greed, materialism, letting go"),
    ("Hardship, loss, isolation", "Recovery, charity, improvement"),
    ("Generosity, sharing, giving and receiving", "Debt, strings attached, one-sided charity"),
    ("Patience, long-term view, investment", "Impatience, lack of reward, wasted effort"),
    ("Diligence, mastery, skill development", "Perfectionism, lack of focus, mediocrity"),
    ("Abundance, self-sufficiency, luxury", "Overwork, hustling, financial setbacks"),
    ("Legacy, family wealth, long-term success", "Financial failure, family disputes, loss"),
    ("Ambition, study, new skill", "Procrastination, missed lessons, lack of progress"),
    ("Hard work, routine, reliability", "Boredom, stagnation, laziness"),
    ("Practicality, nurturing, financial security", "Self-care neglected, work-home imbalance"),
    ("Wealth, discipline, abundance", "Greed, indulgence, stubbornness"),
];

fn suit_meanings(suit: Suit) -> &'static [(&'static str, &'static str); 14] {
    match suit {
        Suit::Wands     => &WANDS,
        Suit::Cups      => &CUPS,
        Suit::Swords    => &SWORDS,
        Suit::Pentacles => &PENTACLES,
    }
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

fn build_catalogue() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for (number, &(name, upright, reversed)) in MAJOR_ARCANA.iter().enumerate() {
        cards.push(Card {
            id: CardId(cards.len() as u8),
            slug: format!("major_{:02}_{}", number, slug(name)),
            name: name.to_string(),
            arcana: Arcana::Major,
            suit: None,
            rank: None,
            number: Some(number as u8),
            upright_meaning: upright,
            reversed_meaning: reversed,
        });
    }

    for suit in Suit::ALL {
        for (rank, &(upright, reversed)) in Rank::ALL.iter().zip(suit_meanings(suit)) {
            cards.push(Card {
                id: CardId(cards.len() as u8),
                slug: format!("minor_{}_{}", suit.key(), rank.key()),
                name: format!("{} of {}", rank, suit),
                arcana: Arcana::Minor,
                suit: Some(suit),
                rank: Some(*rank),
                number: None,
                upright_meaning: upright,
                reversed_meaning: reversed,
            });
        }
    }

    debug_assert_eq!(cards.len(), DECK_SIZE);
    cards
}

/// All 78 cards in canonical catalogue order.
pub fn all_cards() -> &'static [Card] {
    static CATALOGUE: OnceLock<Vec<Card>> = OnceLock::new();
    CATALOGUE.get_or_init(build_catalogue)
}

/// Look up a card by numeric id.
pub fn get(id: usize) -> DrawResult<&'static Card> {
    all_cards().get(id).ok_or(DrawError::Lookup { id })
}

/// Look up a card by slug, e.g. `"minor_cups_queen"`.
pub fn find_by_slug(slug: &str) -> Option<&'static Card> {
    all_cards().iter().find(|c| c.slug == slug)
}
