use crate::models::{PhotoRef, Profile};

const MALE_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Bob", "Alex", "Chris", "Daniel", "Matthew", "Anthony", "Mark", "Donald",
    "Steven", "Paul",
];

const FEMALE_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
    "Sarah", "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly",
    "Emily", "Donna", "Michelle",
];

const BIOS: &[&str] = &[
    "Loves hiking, coffee, and good books.",
    "A foodie and traveler. Let's explore the world together!",
    "Music, art, and yoga enthusiast.",
    "Enjoys running marathons and cooking new recipes.",
    "Passionate about technology and design.",
    "Dog lover and aspiring photographer.",
    "Always up for an adventure or a cozy night in.",
    "Fitness junkie and movie buff.",
    "Dreaming of traveling the world.",
    "Looking for someone to share laughs and good times.",
];

const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Chicago, IL",
    "Seattle, WA",
    "Boston, MA",
    "Denver, CO",
    "Miami, FL",
    "Portland, OR",
    "Los Angeles, CA",
];

const INTERESTS: &[&str] = &[
    "Hiking", "Reading", "Coffee", "Travel", "Food", "Photography", "Music", "Art", "Yoga",
    "Running", "Cooking", "Movies", "Fitness", "Dancing", "Tech", "Design", "Dogs", "Cats",
    "Outdoors", "Gaming",
];

const JOBS: &[&str] = &[
    "Software Engineer", "Product Manager", "Graphic Designer", "Teacher", "Nurse", "Doctor",
    "Photographer", "Chef", "Writer", "Artist", "Marketing Specialist", "Sales Manager",
    "Consultant", "Architect", "Engineer", "Researcher", "Entrepreneur", "Barista",
    "Musician", "Trainer",
];

const EDUCATIONS: &[&str] = &[
    "Stanford University", "NYU", "UT Austin", "MIT", "Harvard", "UCLA", "UC Berkeley",
    "Yale", "Princeton", "Columbia",
];

const MALE_PHOTOS: &[&str] = &[
    "assets/images/pexels-olly-785667.jpg",
    "assets/images/pexels-pixabay-458766.jpg",
    "assets/images/pexels-moose-photos-170195-1036620.jpg",
    "assets/images/pexels-bertellifotografia-573299.jpg",
    "assets/images/pexels-olly-712513.jpg",
    "assets/images/pexels-vinicius-wiesehofer-289347-1130626.jpg",
    "assets/images/pexels-juanpphotoandvideo-1139743.jpg",
    "assets/images/pexels-brett-sayles-1073097.jpg",
    "assets/images/pexels-samad-ismayilov-231721-1270076.jpg",
    "assets/images/pexels-mostafasanadd-868113.jpg",
    "assets/images/pexels-linkedin-2182970.jpg",
    "assets/images/pexels-stefanstefancik-91227.jpg",
    "assets/images/pexels-danxavier-1121796.jpg",
    "assets/images/pexels-justin-shaifer-501272-1222271.jpg",
    "assets/images/pexels-simon-robben-55958-614810.jpg",
    "assets/images/pexels-olly-874158.jpg",
    "assets/images/pexels-italo-melo-881954-2379004.jpg",
];

const FEMALE_PHOTOS: &[&str] = &[
    "assets/images/pexels-godisable-jacob-226636-718978.jpg",
    "assets/images/pexels-olly-774095.jpg",
    "assets/images/pexels-anastasiya-gepp-654466-2065195.jpg",
    "assets/images/pexels-divinetechygirl-1181690.jpg",
    "assets/images/pexels-hannah-nelson-390257-1065084.jpg",
    "assets/images/pexels-pixabay-415829.jpg",
    "assets/images/pexels-olly-774909.jpg",
    "assets/images/pexels-olly-733872.jpg",
    "assets/images/pexels-moose-photos-170195-1036623.jpg",
    "assets/images/pexels-kebs-visuals-742415-3992656.jpg",
    "assets/images/pexels-italo-melo-881954-2379005.jpg",
    "assets/images/pexels-chloekalaartist-1043473.jpg",
    "assets/images/pexels-elletakesphotos-1680175.jpg",
    "assets/images/pexels-moose-photos-170195-1036627.jpg",
    "assets/images/pexels-divinetechygirl-1181391.jpg",
    "assets/images/pexels-olly-846741.jpg",
    "assets/images/pexels-chloekalaartist-1043474.jpg",
];

/// Seeded generator of realistic-looking candidate profiles.
///
/// Used when the backend is unreachable or its collection is empty, and by
/// tests and benches that need a deck of plausible data. The same seed
/// always produces the same profiles.
#[derive(Debug, Clone)]
pub struct MockProfiles {
    state: u64,
}

impl MockProfiles {
    pub fn new(seed: u64) -> Self {
        Self {
            // xorshift must not start at zero.
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    /// Generate `count` profiles with ids "1" through `count`.
    pub fn generate(count: usize, seed: u64) -> Vec<Profile> {
        let mut generator = Self::new(seed);
        (1..=count).map(|i| generator.profile(i)).collect()
    }

    // xorshift64* keeps the generator dependency-free and deterministic.
    fn next(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn range(&mut self, max: usize) -> usize {
        (self.next() % max as u64) as usize
    }

    fn pick<'a>(&mut self, options: &'a [&'a str]) -> &'a str {
        options[self.range(options.len())]
    }

    fn pick_interests(&mut self) -> Vec<String> {
        // Two to five distinct interests per profile.
        let count = 2 + self.range(4);
        let mut picked = Vec::with_capacity(count);
        while picked.len() < count {
            let interest = self.pick(INTERESTS).to_string();
            if !picked.contains(&interest) {
                picked.push(interest);
            }
        }
        picked
    }

    /// Generate the profile at position `index` (used for the id and to
    /// rotate through the photo assets).
    pub fn profile(&mut self, index: usize) -> Profile {
        let male = self.next() % 2 == 0;
        let (names, photos, gender) = if male {
            (MALE_NAMES, MALE_PHOTOS, "Male")
        } else {
            (FEMALE_NAMES, FEMALE_PHOTOS, "Female")
        };

        Profile {
            id: index.to_string(),
            name: self.pick(names).to_string(),
            age: 21 + self.range(18) as u8,
            bio: self.pick(BIOS).to_string(),
            photo: PhotoRef::Asset(photos[(index - 1) % photos.len()].to_string()),
            location: Some(self.pick(LOCATIONS).to_string()),
            gender: Some(gender.to_string()),
            interests: self.pick_interests(),
            job: Some(self.pick(JOBS).to_string()),
            education: Some(self.pick(EDUCATIONS).to_string()),
        }
    }
}
