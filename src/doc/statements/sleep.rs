/*!
# `SLEEP <seconds>`

## Purpose
Pause the program.

## Remarks
The expression gives seconds and may be fractional. Timing is
best-effort; zero and negative values do not pause at all.

*/
