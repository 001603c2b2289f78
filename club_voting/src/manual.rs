/*!

This is the long-form manual for `club_voting` and `bookvote`.

## The voting scheme

A session collects one nomination per member and one ballot per member. A
ballot is an ordered list of picks among the registered nominations: first
pick is the book the voter most wants to read, and so on. A ballot does not
need to rank everything.

The score of a nomination is its average placement across the voters:

```text
score = (sum over places of place * voters_at_place
         + non_voters * nomination_count)
        / (voters_who_placed_it + non_voters)
```

A voter who cast a ballot without ranking a given book counts against that
book as if they had ranked it dead last. A member who never voted does not
count at all. Lower scores are better. With no ballots in the session every
score defaults to 0.

The winner is the nomination with the lowest score. When several nominations
share the exact lowest score, the tie is resolved place by place: at place 1,
only the tied books with the most first-place votes stay in; if more than one
remains, place 2 is compared, and so on up to the nomination count. A tie
that survives every place is reported as a multi-way tie rather than being
broken arbitrarily.

## Session files

The `bookvote` binary replays a session recorded as a JSON document:

```json
{
    "groupName": "sci-fi club",
    "members": [
        {"id": 1, "name": "ann"},
        {"id": 2, "name": "ben"}
    ],
    "nominations": [
        {"member": 1, "query": "dune"},
        {"member": 2, "query": "left hand of darkness"}
    ],
    "ballots": [
        {"member": 1, "picks": [1, 2]},
        {"member": 2, "picks": [2, 1]}
    ],
    "catalogPath": "catalog.json"
}
```

Picks are the 1-based positions of the nominations, in registration order.
A ballot with an out-of-range position or ranking the same book twice is
rejected as a whole and logged; the rest of the session is still processed.

## Catalogs

Nomination queries are resolved against an offline catalog file: an array of
volume records following the shape of the Google Books API (`volumeInfo`
with `title`, `authors`, `description`, `pageCount` and
`imageLinks.thumbnail`). The query matches case-insensitively on title or
author and the first match wins. Missing metadata falls back to documented
defaults, see [crate::Book::from_record].

The catalog may also be embedded in the session file under the `catalog`
key. The `--catalog` flag overrides both.

## Checking against a reference

Passing `--reference summary.json` compares the tabulated summary with a
previously recorded one and fails with a printed diff on any difference.

 */
