//! Default ASCII-to-Sitelen-Pona lexicon, embedded as TOML.
//!
//! Codepoints follow the UCSUR Sitelen Pona allocation: the word glyphs sit
//! in U+F1900..U+F1988 plus U+F19A0..U+F19A3, and the cartouche brackets at
//! U+F1990/U+F1991.

pub(crate) const DEFAULT_TOML: &str = r#"
[mappings]
a = "F1900"
akesi = "F1901"
ala = "F1902"
alasa = "F1903"
ale = "F1904"
anpa = "F1905"
ante = "F1906"
anu = "F1907"
awen = "F1908"
e = "F1909"
en = "F190A"
esun = "F190B"
ijo = "F190C"
ike = "F190D"
ilo = "F190E"
insa = "F190F"
jaki = "F1910"
jan = "F1911"
jalo = "F1912"
jo = "F1913"
kala = "F1914"
kalama = "F1915"
kama = "F1916"
kasi = "F1917"
ken = "F1918"
kepeken = "F1919"
kili = "F191A"
kiwen = "F191B"
ko = "F191C"
kon = "F191D"
kule = "F191E"
kulupu = "F191F"
kute = "F1920"
la = "F1921"
lape = "F1922"
laso = "F1923"
lawa = "F1924"
len = "F1925"
lete = "F1926"
li = "F1927"
lili = "F1928"
linja = "F1929"
lipu = "F192A"
loje = "F192B"
lon = "F192C"
luka = "F192D"
lukin = "F192E"
lupa = "F192F"
ma = "F1930"
mama = "F1931"
mani = "F1932"
meli = "F1933"
mi = "F1934"
mije = "F1935"
moku = "F1936"
moli = "F1937"
monsi = "F1938"
mu = "F1939"
mun = "F193A"
musi = "F193B"
mute = "F193C"
nanpa = "F193D"
nasa = "F193E"
nasin = "F193F"
nena = "F1940"
ni = "F1941"
nimi = "F1942"
noka = "F1943"
o = "F1944"
olin = "F1945"
ona = "F1946"
open = "F1947"
pakala = "F1948"
pali = "F1949"
palisa = "F194A"
pan = "F194B"
pana = "F194C"
pi = "F194D"
pilin = "F194E"
pimeja = "F194F"
pini = "F1950"
pipi = "F1951"
poka = "F1952"
poki = "F1953"
pona = "F1954"
pu = "F1955"
sama = "F1956"
seli = "F1957"
selo = "F1958"
seme = "F1959"
sewi = "F195A"
sijelo = "F195B"
sike = "F195C"
sin = "F195D"
sina = "F195E"
sinpin = "F195F"
sitelen = "F1960"
sona = "F1961"
soweli = "F1962"
suli = "F1963"
suno = "F1964"
supa = "F1965"
suwi = "F1966"
tan = "F1967"
taso = "F1968"
tawa = "F1969"
telo = "F196A"
tenpo = "F196B"
toki = "F196C"
tomo = "F196D"
tu = "F196E"
unpa = "F196F"
uta = "F1970"
utala = "F1971"
walo = "F1972"
wan = "F1973"
waso = "F1974"
wawa = "F1975"
weka = "F1976"
wile = "F1977"
namako = "F1978"
kin = "F1979"
oko = "F197A"
kipisi = "F197B"
leko = "F197C"
monsuta = "F197D"
tonsi = "F197E"
jasima = "F197F"
kijetesantakalu = "F1980"
soko = "F1981"
meso = "F1982"
epiku = "F1983"
kokosila = "F1984"
lanpan = "F1985"
n = "F1986"
misikeke = "F1987"
ku = "F1988"
pake = "F19A0"
apeja = "F19A1"
majuna = "F19A2"
powe = "F19A3"
"[" = "F1990"
"]" = "F1991"
"#;
